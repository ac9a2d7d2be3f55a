//! 编辑器选项与请求状态查询。
//!
//! - GET /options
//! - GET /requests/{operation}

use crate::AppState;
use crate::utils::bad_request_error;
use api_contract::{ApiResponse, RequestStatusDto};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::OperationKind;

pub async fn get_options(State(state): State<AppState>) -> Response {
    let options = state.dispatcher.state().editor_options();
    (StatusCode::OK, Json(ApiResponse::success(options))).into_response()
}

pub async fn get_request_status(
    State(state): State<AppState>,
    Path(operation): Path<String>,
) -> Response {
    let Some(kind) = OperationKind::parse(&operation) else {
        return bad_request_error(format!("unknown operation: {operation}"));
    };
    let status = state.dispatcher.tracker().status(kind);
    let dto = RequestStatusDto {
        operation: kind.as_str().to_string(),
        status: status.as_str().to_string(),
        message: status.error().map(str::to_string),
    };
    (StatusCode::OK, Json(ApiResponse::success(dto))).into_response()
}
