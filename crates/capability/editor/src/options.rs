//! 选项列表与引用解析。
//!
//! 引用解析统一使用 [`RefId`] 的宽松相等（字符串规范化后比较）。

use domain::{LatLng, OptionItem, RefId};
use serde::{Deserialize, Serialize};

/// 编辑器所需的选项列表与默认位置，由调用层的选择器提供。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    #[serde(default)]
    pub asset_options: Vec<OptionItem>,
    #[serde(default)]
    pub device_options: Vec<OptionItem>,
    #[serde(default)]
    pub edge_options: Vec<OptionItem>,
    #[serde(default)]
    pub group_options: Vec<OptionItem>,
    #[serde(default)]
    pub default_location: LatLng,
}

/// 查找第一个 ID 匹配的选项；`id` 为空或无匹配时返回 None。
pub fn find_option<'a>(options: &'a [OptionItem], id: Option<&RefId>) -> Option<&'a OptionItem> {
    let id = id?;
    options.iter().find(|option| option.id == *id)
}

/// 上联资产候选：排除记录自身。
pub fn uplink_candidates(options: &[OptionItem], own_id: Option<&RefId>) -> Vec<OptionItem> {
    options
        .iter()
        .filter(|option| own_id.is_none_or(|own| option.id != *own))
        .cloned()
        .collect()
}

/// 已选分组：保留 ID 出现在 `group_ids` 中的分组选项，按选项顺序输出。
///
/// 已删除（无对应选项）的分组 ID 被静默丢弃。
pub fn select_groups(options: &[OptionItem], group_ids: &[RefId]) -> Vec<OptionItem> {
    options
        .iter()
        .filter(|option| group_ids.contains(&option.id))
        .cloned()
        .collect()
}
