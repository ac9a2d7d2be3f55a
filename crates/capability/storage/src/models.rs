//! 数据模型
//!
//! 资产本身使用 `domain::AssetRecord`，这里只定义编辑器引用到的其他实体：
//! - 分组：GroupRecord（区分系统分组与自定义分组）
//! - 设备类型：DeviceTypeRecord
//! - 边缘节点：EdgeRecord

use domain::RefId;
use serde::{Deserialize, Serialize};

/// 资产分组。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: RefId,
    pub name: String,
    /// 用户自定义分组；只有自定义分组可在编辑器中选择。
    #[serde(default)]
    pub custom: bool,
}

/// 设备类型。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTypeRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: RefId,
    pub name: String,
}

/// 边缘节点。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: RefId,
    pub name: String,
}
