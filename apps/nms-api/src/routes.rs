//! 路由定义
//!
//! - 健康检查：/health
//! - 指标快照：/metrics
//! - 编辑器选项：/options
//! - 请求状态：/requests/{operation}
//! - 编辑会话：/editor/sessions/*

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/options", get(get_options))
        .route("/requests/:operation", get(get_request_status))
        .route("/editor/sessions", post(create_session))
        .route(
            "/editor/sessions/:session_id",
            get(get_session).delete(delete_session),
        )
        .route("/editor/sessions/:session_id/changes", post(apply_change))
        .route("/editor/sessions/:session_id/submit", post(submit_session))
        .route("/editor/sessions/:session_id/reset", post(reset_session))
}
