//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }

    /// 失败响应，同时携带数据（例如字段级校验错误）。
    pub fn error_with_data(code: impl Into<String>, message: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 编辑器会话创建请求体。
///
/// `assetId` 缺失表示新建资产。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default, alias = "asset_id")]
    pub asset_id: Option<String>,
    #[serde(default, alias = "external_confirm")]
    pub external_confirm: bool,
}

/// 编辑器会话返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto<V> {
    pub session_id: String,
    pub view: V,
}

/// 提交结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse<R> {
    pub action: String,
    pub asset: R,
}

/// 请求生命周期状态。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatusDto {
    pub operation: String,
    pub status: String,
    pub message: Option<String>,
}

/// 编辑器指标快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub assets_refreshes: u64,
    pub groups_refreshes: u64,
    pub creates_dispatched: u64,
    pub updates_dispatched: u64,
    pub dispatch_failures: u64,
    pub validation_rejections: u64,
    pub editors_mounted: u64,
    pub editors_unmounted: u64,
}
