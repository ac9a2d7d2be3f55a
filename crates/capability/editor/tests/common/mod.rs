#![allow(dead_code)]

use domain::{AssetRecord, Geo, LatLng, OperationKind, OptionItem, RefId};
use nms_editor::{AssetDispatcher, EditorOptions, FormState};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Create(AssetRecord),
    Update(AssetRecord),
    FetchAsset(RefId),
    FetchAssets,
    FetchGroups,
    Reset(OperationKind),
}

/// 记录全部下发动作的测试下发器。
#[derive(Default)]
pub struct RecordingDispatcher {
    actions: Mutex<Vec<Action>>,
}

impl RecordingDispatcher {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().expect("lock").clone()
    }

    pub fn count(&self, action: &Action) -> usize {
        self.actions().iter().filter(|item| *item == action).count()
    }

    fn push(&self, action: Action) {
        self.actions.lock().expect("lock").push(action);
    }
}

impl AssetDispatcher for RecordingDispatcher {
    fn create_asset(&self, record: AssetRecord) {
        self.push(Action::Create(record));
    }

    fn update_asset(&self, record: AssetRecord) {
        self.push(Action::Update(record));
    }

    fn fetch_asset(&self, id: RefId) {
        self.push(Action::FetchAsset(id));
    }

    fn fetch_assets(&self) {
        self.push(Action::FetchAssets);
    }

    fn fetch_groups(&self) {
        self.push(Action::FetchGroups);
    }

    fn reset_pending_operation(&self, kind: OperationKind) {
        self.push(Action::Reset(kind));
    }
}

pub fn default_location() -> LatLng {
    LatLng(34.78, 32.08)
}

pub fn options() -> EditorOptions {
    EditorOptions {
        asset_options: vec![
            OptionItem::new("a-1", "core-router"),
            OptionItem::new("a-2", "access-switch"),
        ],
        device_options: vec![OptionItem::new("1", "router"), OptionItem::new("2", "switch")],
        edge_options: vec![OptionItem::new("e1", "edge-1")],
        group_options: vec![OptionItem::new("g1", "lab"), OptionItem::new("g2", "prod")],
        default_location: default_location(),
    }
}

/// 已持久化的资产记录（ID 为 `{"$oid": "a-1"}`，设备类型 ID 为数字）。
pub fn persisted_record() -> AssetRecord {
    AssetRecord {
        id: Some(RefId::object_id("a-1")),
        name: "r1".to_string(),
        address: "10.0.0.1".to_string(),
        port: "8080".to_string(),
        device_type_id: Some(RefId::from(1)),
        edge_id: Some(RefId::from("e1")),
        uplink_asset_id: Some(RefId::from("a-2")),
        group_ids: vec![RefId::from("g2"), RefId::from("gone")],
        location_name: Some("HQ".to_string()),
        geo: Some(Geo::point(LatLng(34.8, 32.1))),
        status: Some("online".to_string()),
        ..AssetRecord::default()
    }
}

/// 全部必填项合法的表单值。
pub fn valid_values() -> FormState {
    FormState {
        name: "r1".to_string(),
        address: "10.0.0.1".to_string(),
        port: "8080".to_string(),
        device_type_id_selection: Some(OptionItem::new("1", "router")),
        ..FormState::default()
    }
}
