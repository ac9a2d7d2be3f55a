//! HTTP 响应辅助函数
//!
//! 所有错误返回统一的 ApiResponse 格式，HTTP 状态码与错误码对应。

use api_contract::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nms_dispatch::DispatchError;
use nms_editor::ErrorMap;
use nms_storage::StorageError;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 字段校验失败响应（data 为字段 → 错误文案）
pub fn validation_error(message: impl Into<String>, errors: ErrorMap) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error_with_data(
            "VALIDATION.FAILED",
            message.into(),
            errors,
        )),
    )
        .into_response()
}

/// 下发链路错误响应
pub fn dispatch_error(err: DispatchError) -> Response {
    match err {
        DispatchError::Storage(StorageError::NotFound(_)) => not_found_error(),
        DispatchError::Storage(StorageError::Invalid(message)) => bad_request_error(message),
        err => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("INTERNAL.ERROR", err.to_string())),
        )
            .into_response(),
    }
}
