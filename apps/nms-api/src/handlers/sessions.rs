//! 编辑会话 API
//!
//! - POST   /editor/sessions                  挂载编辑器
//! - GET    /editor/sessions/{id}             以最新状态重新渲染
//! - POST   /editor/sessions/{id}/changes     应用交互事件
//! - POST   /editor/sessions/{id}/submit      校验并提交
//! - POST   /editor/sessions/{id}/reset       放弃修改
//! - DELETE /editor/sessions/{id}             卸载编辑器

use crate::{AppState, SessionEntry};
use crate::utils::{dispatch_error, not_found_error, validation_error};
use api_contract::{ApiResponse, CreateSessionRequest, SessionDto, SubmitResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{AssetRecord, OperationKind, RefId};
use nms_editor::{AssetEditor, EditorError, EditorEvent, EditorSettings, EditorView};
use std::sync::Arc;
use tracing::info;

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let record = match req.asset_id {
        Some(asset_id) => match load_record(&state, RefId::from(asset_id)).await {
            Ok(record) => Some(record),
            Err(response) => return response,
        },
        None => None,
    };

    let settings = EditorSettings {
        polling_interval: state.polling_interval,
        external_confirm: req.external_confirm,
    };
    let editor = AssetEditor::mount(
        settings,
        record,
        state.dispatcher.state().editor_options(),
        Arc::new(state.dispatcher.clone()),
        Arc::clone(&state.translator),
    );

    let session_id = uuid::Uuid::new_v4().to_string();
    let view = render_view(&state, &editor);
    info!(
        target: "nms.api",
        session_id = %session_id,
        mode = ?view.mode,
        external_confirm = req.external_confirm,
        "editor_session_created"
    );
    state
        .sessions()
        .insert(session_id.clone(), SessionEntry::new(editor));

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(SessionDto { session_id, view })),
    )
        .into_response()
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    with_session(&state, &session_id, |state, editor| {
        let record = current_record(state, editor);
        editor.render(record, state.dispatcher.state().editor_options());
        session_response(session_id.clone(), render_view(state, editor))
    })
}

pub async fn apply_change(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(event): Json<EditorEvent>,
) -> Response {
    with_session(&state, &session_id, |state, editor| {
        editor.handle(event);
        session_response(session_id.clone(), render_view(state, editor))
    })
}

pub async fn submit_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    with_session(&state, &session_id, |_, editor| match editor.submit() {
        Ok(submission) => {
            let action = submission.action().to_string();
            (
                StatusCode::ACCEPTED,
                Json(ApiResponse::success(SubmitResponse {
                    action,
                    asset: submission.into_record(),
                })),
            )
                .into_response()
        }
        Err(err @ EditorError::Validation(_)) => {
            validation_error(err.to_string(), err.field_errors().clone())
        }
    })
}

pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    with_session(&state, &session_id, |state, editor| {
        editor.reset();
        session_response(session_id.clone(), render_view(state, editor))
    })
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Some(mut entry) = state.sessions().remove(&session_id) else {
        return not_found_error();
    };
    entry.editor.unmount();
    info!(target: "nms.api", session_id = %session_id, "editor_session_closed");
    (StatusCode::OK, Json(ApiResponse::success(session_id))).into_response()
}

/// 先查客户端缓存，缺失时向存储拉取单条资产。
async fn load_record(state: &AppState, id: RefId) -> Result<AssetRecord, Response> {
    if let Some(record) = state.dispatcher.state().find_asset(&id) {
        return Ok(record);
    }
    state.dispatcher.load_asset(id).await.map_err(dispatch_error)
}

/// 已有资产取缓存中的最新版本；缓存中已不存在时保留会话内的记录。
fn current_record(state: &AppState, editor: &AssetEditor) -> Option<AssetRecord> {
    let record = editor.record()?;
    record
        .id
        .as_ref()
        .and_then(|id| state.dispatcher.state().find_asset(id))
        .or_else(|| Some(record.clone()))
}

/// 生成视图；顶层错误取对应 create/update 请求的失败信息。
fn render_view(state: &AppState, editor: &AssetEditor) -> EditorView {
    let kind = if editor.record().is_some_and(AssetRecord::is_persisted) {
        OperationKind::UpdateAsset
    } else {
        OperationKind::CreateAsset
    };
    let status = state.dispatcher.tracker().status(kind);
    editor.view(status.error())
}

fn with_session<F>(state: &AppState, session_id: &str, handle: F) -> Response
where
    F: FnOnce(&AppState, &mut AssetEditor) -> Response,
{
    let mut sessions = state.sessions();
    match sessions.get_mut(session_id) {
        Some(entry) => {
            entry.touch();
            handle(state, &mut entry.editor)
        }
        None => not_found_error(),
    }
}

fn session_response(session_id: String, view: EditorView) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::success(SessionDto { session_id, view })),
    )
        .into_response()
}
