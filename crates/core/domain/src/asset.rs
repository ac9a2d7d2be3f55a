//! 网络资产记录。

use crate::reference::RefId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 坐标对，按存储时的顺序保存，不做经纬度重排。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self(pair[0], pair[1])
    }

    pub fn to_pair(self) -> [f64; 2] {
        [self.0, self.1]
    }
}

/// 资产地理位置（GeoJSON 形式）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geo {
    Point { coordinates: [f64; 2] },
}

impl Geo {
    pub fn point(coordinates: LatLng) -> Self {
        Self::Point {
            coordinates: coordinates.to_pair(),
        }
    }

    pub fn coordinates(&self) -> LatLng {
        match self {
            Self::Point { coordinates } => LatLng::from_pair(*coordinates),
        }
    }
}

/// 资产记录。
///
/// - `id` 缺失表示新建，存在表示编辑
/// - `port` 线上可能是字符串或数字，统一保存为文本
/// - `status` 只读，由其他链路写入
/// - 表单不认识的字段保存在 `extra` 中，提交时原样带回
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RefId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "port_text")]
    pub port: String,
    #[serde(default)]
    pub device_type_id: Option<RefId>,
    #[serde(default)]
    pub edge_id: Option<RefId>,
    #[serde(default)]
    pub uplink_asset_id: Option<RefId>,
    #[serde(default, deserialize_with = "nullable_ids")]
    pub group_ids: Vec<RefId>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetRecord {
    /// 是否为已持久化的记录（带 ID）。
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Text(String),
    Number(serde_json::Number),
}

fn port_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<PortRepr>::deserialize(deserializer)?;
    Ok(match value {
        Some(PortRepr::Text(text)) => text,
        Some(PortRepr::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn nullable_ids<'de, D>(deserializer: D) -> Result<Vec<RefId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RefId>>::deserialize(deserializer)?.unwrap_or_default())
}
