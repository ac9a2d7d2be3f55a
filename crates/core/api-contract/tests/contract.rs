use api_contract::{CreateSessionRequest, RequestStatusDto, SessionDto, SubmitResponse};
use serde_json::json;

#[test]
fn create_session_request_accepts_camel_case() {
    let payload = r#"{"assetId":"a-1","externalConfirm":true}"#;
    let req: CreateSessionRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.asset_id.as_deref(), Some("a-1"));
    assert!(req.external_confirm);
}

#[test]
fn create_session_request_accepts_snake_case() {
    let payload = r#"{"asset_id":"a-2"}"#;
    let req: CreateSessionRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.asset_id.as_deref(), Some("a-2"));
    assert!(!req.external_confirm);
}

#[test]
fn create_session_request_defaults_to_new_asset() {
    let req: CreateSessionRequest = serde_json::from_str("{}").expect("parse");
    assert!(req.asset_id.is_none());
}

#[test]
fn session_dto_is_camel_case() {
    let dto = SessionDto {
        session_id: "s-1".to_string(),
        view: json!({ "dirty": false }),
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("sessionId").is_some());
    assert!(value.get("session_id").is_none());
}

#[test]
fn submit_and_status_are_camel_case() {
    let submit = SubmitResponse {
        action: "create".to_string(),
        asset: json!({ "name": "r1" }),
    };
    let value = serde_json::to_value(submit).expect("serialize");
    assert_eq!(value.get("action"), Some(&json!("create")));

    let status = RequestStatusDto {
        operation: "create_asset".to_string(),
        status: "failed".to_string(),
        message: Some("duplicate".to_string()),
    };
    let value = serde_json::to_value(status).expect("serialize");
    assert_eq!(value.get("operation"), Some(&json!("create_asset")));
    assert_eq!(value.get("message"), Some(&json!("duplicate")));
}

#[test]
fn metrics_snapshot_dto_is_camel_case() {
    let dto = api_contract::MetricsSnapshotDto {
        assets_refreshes: 3,
        groups_refreshes: 3,
        creates_dispatched: 1,
        updates_dispatched: 0,
        dispatch_failures: 0,
        validation_rejections: 2,
        editors_mounted: 1,
        editors_unmounted: 0,
    };
    let value = serde_json::to_value(&dto).expect("serialize");
    assert_eq!(value["assetsRefreshes"], json!(3));
    assert_eq!(value["validationRejections"], json!(2));
}
