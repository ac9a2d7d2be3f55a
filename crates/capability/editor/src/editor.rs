//! 资产编辑器：组合字段映射、表单会话、地图中心与轮询生命周期。

use crate::dispatcher::AssetDispatcher;
use crate::error::EditorError;
use crate::form::{ErrorMap, FieldChange, FormField, FormState};
use crate::lifecycle::PollingLifecycle;
use crate::map_center::MapCenter;
use crate::mapper::{EditorMode, LoadedForm, resolve_form};
use crate::options::EditorOptions;
use crate::session::FormSession;
use crate::submit::Submission;
use domain::{AssetRecord, LatLng, OptionItem};
use nms_i18n::Translator;
use nms_telemetry::record_validation_rejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// 编辑器挂载参数。
#[derive(Debug, Clone, Copy)]
pub struct EditorSettings {
    pub polling_interval: Duration,
    /// 外部确认模式：隐藏标题与底部按钮，改为有修改时显示悬浮确认条。
    pub external_confirm: bool,
}

/// 用户交互事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorEvent {
    Change { change: FieldChange },
    Touch { field: FormField },
    /// 地图控件 onCenter。
    Recenter { center: LatLng },
}

/// 编辑器渲染所需的全部数据。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub mode: EditorMode,
    /// 外部确认模式下为 None。
    pub action_label: Option<String>,
    pub values: FormState,
    pub errors: ErrorMap,
    pub dirty: bool,
    pub device_options: Vec<OptionItem>,
    pub edge_options: Vec<OptionItem>,
    pub uplink_candidates: Vec<OptionItem>,
    pub group_options: Vec<OptionItem>,
    pub map_center: Option<LatLng>,
    /// 资产状态（只读，仅已有资产展示）。
    pub status: Option<String>,
    /// 顶层错误（例如服务端拒绝），原样展示，仅非外部确认模式。
    pub error_banner: Option<String>,
    pub show_footer: bool,
    pub show_confirm_bar: bool,
}

/// 资产编辑器。
///
/// 每次 `render` 都由当前记录与选项重新解析初始值；解析结果变化时表单
/// 重新初始化。挂载期间持有轮询生命周期，`unmount` 或 drop 时清理。
pub struct AssetEditor {
    translator: Arc<dyn Translator>,
    dispatcher: Arc<dyn AssetDispatcher>,
    external_confirm: bool,
    record: Option<AssetRecord>,
    options: EditorOptions,
    loaded: LoadedForm,
    session: FormSession,
    map_center: MapCenter,
    lifecycle: PollingLifecycle,
}

impl AssetEditor {
    /// 挂载编辑器并启动轮询刷新。必须在 Tokio 运行时内调用。
    pub fn mount(
        settings: EditorSettings,
        record: Option<AssetRecord>,
        options: EditorOptions,
        dispatcher: Arc<dyn AssetDispatcher>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let loaded = resolve_form(record.as_ref(), &options, translator.as_ref());
        let mut map_center = MapCenter::default();
        map_center.observe(loaded.geo_point);
        let session = FormSession::new(loaded.values.clone());
        let lifecycle = PollingLifecycle::mount(Arc::clone(&dispatcher), settings.polling_interval);

        Self {
            translator,
            dispatcher,
            external_confirm: settings.external_confirm,
            record,
            options,
            loaded,
            session,
            map_center,
            lifecycle,
        }
    }

    /// 以最新的记录与选项重新渲染。
    pub fn render(&mut self, record: Option<AssetRecord>, options: EditorOptions) {
        let loaded = resolve_form(record.as_ref(), &options, self.translator.as_ref());
        self.map_center.observe(loaded.geo_point);
        self.session.reinitialize(loaded.values.clone());
        self.record = record;
        self.options = options;
        self.loaded = loaded;
    }

    pub fn handle(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Change { change } => self.session.apply(change),
            EditorEvent::Touch { field } => self.session.touch(field),
            EditorEvent::Recenter { center } => self.map_center.recenter(center),
        }
    }

    /// 提交表单（校验失败时不下发）。
    pub fn submit(&mut self) -> Result<Submission, EditorError> {
        let result = self.session.submit(
            self.record.as_ref(),
            self.dispatcher.as_ref(),
            self.translator.as_ref(),
        );
        if let Err(EditorError::Validation(errors)) = &result {
            record_validation_rejection();
            warn!(
                target: "nms.editor",
                fields = errors.len(),
                "asset_submit_rejected"
            );
        }
        result
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn record(&self) -> Option<&AssetRecord> {
        self.record.as_ref()
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn map_center(&self) -> MapCenter {
        self.map_center
    }

    /// 生成视图；`error` 为调用方传入的顶层错误。
    pub fn view(&self, error: Option<&str>) -> EditorView {
        let dirty = self.session.is_dirty();
        let status = self
            .record
            .as_ref()
            .filter(|record| record.is_persisted())
            .and_then(|record| record.status.clone());

        EditorView {
            mode: self.loaded.mode,
            action_label: (!self.external_confirm).then(|| self.loaded.action_label.clone()),
            values: self.session.values().clone(),
            errors: self.session.visible_errors(self.translator.as_ref()),
            dirty,
            device_options: self.options.device_options.clone(),
            edge_options: self.options.edge_options.clone(),
            uplink_candidates: self.loaded.uplink_candidates.clone(),
            group_options: self.options.group_options.clone(),
            map_center: self.map_center.center(),
            status,
            error_banner: error
                .filter(|_| !self.external_confirm)
                .map(str::to_string),
            show_footer: !self.external_confirm,
            show_confirm_bar: self.external_confirm && dirty,
        }
    }
}
