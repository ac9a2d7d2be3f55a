//! Telemetry 指标快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nms_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            assets_refreshes: snapshot.assets_refreshes,
            groups_refreshes: snapshot.groups_refreshes,
            creates_dispatched: snapshot.creates_dispatched,
            updates_dispatched: snapshot.updates_dispatched,
            dispatch_failures: snapshot.dispatch_failures,
            validation_rejections: snapshot.validation_rejections,
            editors_mounted: snapshot.editors_mounted,
            editors_unmounted: snapshot.editors_unmounted,
        })),
    )
        .into_response()
}
