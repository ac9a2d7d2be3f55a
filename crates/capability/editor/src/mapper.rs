//! 加载路径：资产记录 → 表单初始值。

use crate::form::FormState;
use crate::options::{EditorOptions, find_option, select_groups, uplink_candidates};
use domain::{AssetRecord, LatLng, OptionItem};
use nms_i18n::{Params, Translator};
use serde::{Deserialize, Serialize};

/// 编辑模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    Create,
    Update,
}

/// 字段映射结果。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedForm {
    pub mode: EditorMode,
    /// 本地化的动作标题（"Create asset" / "Update asset"）。
    pub action_label: String,
    pub values: FormState,
    /// 上联资产候选（已排除记录自身）。
    pub uplink_candidates: Vec<OptionItem>,
    /// 记录自带的地理坐标（仅更新模式），用于一次性初始化地图中心。
    #[serde(skip)]
    pub geo_point: Option<LatLng>,
}

/// 根据编辑模式生成动作标题。
pub fn action_label(mode: EditorMode, t: &dyn Translator) -> String {
    let key = match mode {
        EditorMode::Create => "createItem",
        EditorMode::Update => "updateItem",
    };
    t.translate(key, &Params::new().with("item", t.t("asset")))
}

/// 将资产记录解析为表单初始值。
///
/// - 无记录或记录无 ID：新建模式，引用选择全部为空，位置取默认位置；
///   草稿记录的名称/地址/端口/位置名称仍会预填
/// - 有 ID：更新模式，引用字段按宽松 ID 相等解析为选项，找不到则留空
///
/// 纯函数：同一输入多次解析结果相同。
pub fn resolve_form(
    record: Option<&AssetRecord>,
    options: &EditorOptions,
    t: &dyn Translator,
) -> LoadedForm {
    let persisted = record.filter(|record| record.is_persisted());
    let mut values = FormState {
        location_lat_lng: Some(options.default_location),
        ..FormState::default()
    };

    if let Some(draft) = record.filter(|record| !record.is_persisted()) {
        values.name = draft.name.clone();
        values.address = draft.address.clone();
        values.port = draft.port.clone();
        values.location_name = draft.location_name.clone();
    }

    let Some(record) = persisted else {
        return LoadedForm {
            mode: EditorMode::Create,
            action_label: action_label(EditorMode::Create, t),
            values,
            uplink_candidates: uplink_candidates(&options.asset_options, None),
            geo_point: None,
        };
    };

    let candidates = uplink_candidates(&options.asset_options, record.id.as_ref());

    values.name = record.name.clone();
    values.address = record.address.clone();
    values.port = record.port.clone();
    values.device_type_id_selection =
        find_option(&options.device_options, record.device_type_id.as_ref()).cloned();
    values.edge_id_selection = find_option(&options.edge_options, record.edge_id.as_ref()).cloned();
    values.uplink_asset_id_selection =
        find_option(&candidates, record.uplink_asset_id.as_ref()).cloned();
    values.group_ids_selection = select_groups(&options.group_options, &record.group_ids);
    values.location_name = record.location_name.clone();

    let geo_point = record.geo.as_ref().map(|geo| geo.coordinates());
    if let Some(point) = geo_point {
        values.location_lat_lng = Some(point);
    }

    LoadedForm {
        mode: EditorMode::Update,
        action_label: action_label(EditorMode::Update, t),
        values,
        uplink_candidates: candidates,
        geo_point,
    }
}
