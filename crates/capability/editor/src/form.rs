//! 表单状态与字段变更。

use domain::{LatLng, OptionItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 表单状态。
///
/// 与 `AssetRecord` 一一对应，但引用字段都解析为选项对象，用于驱动选择控件。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub address: String,
    pub port: String,
    pub device_type_id_selection: Option<OptionItem>,
    pub edge_id_selection: Option<OptionItem>,
    pub uplink_asset_id_selection: Option<OptionItem>,
    pub group_ids_selection: Vec<OptionItem>,
    pub location_name: Option<String>,
    pub location_lat_lng: Option<LatLng>,
}

/// 表单字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Address,
    Port,
    DeviceTypeIdSelection,
    EdgeIdSelection,
    UplinkAssetIdSelection,
    GroupIdsSelection,
    LocationName,
    LocationLatLng,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Address,
        FormField::Port,
        FormField::DeviceTypeIdSelection,
        FormField::EdgeIdSelection,
        FormField::UplinkAssetIdSelection,
        FormField::GroupIdsSelection,
        FormField::LocationName,
        FormField::LocationLatLng,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Port => "port",
            Self::DeviceTypeIdSelection => "deviceTypeIdSelection",
            Self::EdgeIdSelection => "edgeIdSelection",
            Self::UplinkAssetIdSelection => "uplinkAssetIdSelection",
            Self::GroupIdsSelection => "groupIdsSelection",
            Self::LocationName => "locationName",
            Self::LocationLatLng => "locationLatLng",
        }
    }
}

/// 字段 → 本地化错误文案；不存在的 key 表示该字段合法。
pub type ErrorMap = BTreeMap<FormField, String>;

/// 单次字段变更（来自输入框、选择控件或地图控件）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Name(String),
    Address(String),
    Port(String),
    DeviceTypeIdSelection(Option<OptionItem>),
    EdgeIdSelection(Option<OptionItem>),
    UplinkAssetIdSelection(Option<OptionItem>),
    GroupIdsSelection(Vec<OptionItem>),
    /// 地图控件 onChange(address, latLng)：同时更新位置名称与坐标。
    Location {
        name: Option<String>,
        #[serde(rename = "latLng")]
        lat_lng: LatLng,
    },
}

impl FieldChange {
    /// 本次变更涉及的字段。
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::Name(_) => &[FormField::Name],
            Self::Address(_) => &[FormField::Address],
            Self::Port(_) => &[FormField::Port],
            Self::DeviceTypeIdSelection(_) => &[FormField::DeviceTypeIdSelection],
            Self::EdgeIdSelection(_) => &[FormField::EdgeIdSelection],
            Self::UplinkAssetIdSelection(_) => &[FormField::UplinkAssetIdSelection],
            Self::GroupIdsSelection(_) => &[FormField::GroupIdsSelection],
            Self::Location { .. } => &[FormField::LocationName, FormField::LocationLatLng],
        }
    }

    /// 将变更写入表单状态。
    pub fn apply(self, values: &mut FormState) {
        match self {
            Self::Name(value) => values.name = value,
            Self::Address(value) => values.address = value,
            Self::Port(value) => values.port = value,
            Self::DeviceTypeIdSelection(value) => values.device_type_id_selection = value,
            Self::EdgeIdSelection(value) => values.edge_id_selection = value,
            Self::UplinkAssetIdSelection(value) => values.uplink_asset_id_selection = value,
            Self::GroupIdsSelection(value) => values.group_ids_selection = value,
            Self::Location { name, lat_lng } => {
                values.location_name = name;
                values.location_lat_lng = Some(lat_lng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_change_parses_adjacent_form() {
        let change: FieldChange =
            serde_json::from_value(json!({ "field": "port", "value": "502" })).expect("parse");
        assert_eq!(change, FieldChange::Port("502".to_string()));

        let change: FieldChange = serde_json::from_value(json!({
            "field": "location",
            "value": { "name": "Tel Aviv", "latLng": [34.78, 32.08] }
        }))
        .expect("parse");
        assert_eq!(change.fields().len(), 2);
    }

    #[test]
    fn location_change_sets_name_and_coordinates() {
        let mut values = FormState::default();
        FieldChange::Location {
            name: Some("HQ".to_string()),
            lat_lng: LatLng(1.0, 2.0),
        }
        .apply(&mut values);
        assert_eq!(values.location_name.as_deref(), Some("HQ"));
        assert_eq!(values.location_lat_lng, Some(LatLng(1.0, 2.0)));
    }

    #[test]
    fn error_map_serializes_field_names() {
        let mut errors = ErrorMap::new();
        errors.insert(FormField::DeviceTypeIdSelection, "mandatory".to_string());
        let value = serde_json::to_value(&errors).expect("serialize");
        assert_eq!(value, json!({ "deviceTypeIdSelection": "mandatory" }));
    }
}
