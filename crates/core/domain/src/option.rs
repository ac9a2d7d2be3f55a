use crate::reference::RefId;
use serde::{Deserialize, Serialize};

/// 选择控件选项（设备类型、边缘节点、资产、分组共用）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: RefId,
    pub label: String,
}

impl OptionItem {
    pub fn new(id: impl Into<RefId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
