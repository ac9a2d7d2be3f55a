use serde::{Deserialize, Serialize};

/// 需要追踪请求生命周期的异步操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    CreateAsset,
    UpdateAsset,
    FetchAsset,
    FetchAssets,
    FetchGroups,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateAsset => "create_asset",
            Self::UpdateAsset => "update_asset",
            Self::FetchAsset => "fetch_asset",
            Self::FetchAssets => "fetch_assets",
            Self::FetchGroups => "fetch_groups",
        }
    }

    /// 解析路径参数等外部输入。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "create_asset" => Some(Self::CreateAsset),
            "update_asset" => Some(Self::UpdateAsset),
            "fetch_asset" => Some(Self::FetchAsset),
            "fetch_assets" => Some(Self::FetchAssets),
            "fetch_groups" => Some(Self::FetchGroups),
            _ => None,
        }
    }
}
