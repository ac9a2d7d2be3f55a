//! 提交路径：表单值 → 资产记录 → create/update 下发。

use crate::dispatcher::AssetDispatcher;
use crate::form::FormState;
use domain::{AssetRecord, Geo, OperationKind};
use tracing::info;

/// 待下发的提交。
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(AssetRecord),
    Update(AssetRecord),
}

impl Submission {
    pub fn record(&self) -> &AssetRecord {
        match self {
            Self::Create(record) | Self::Update(record) => record,
        }
    }

    pub fn into_record(self) -> AssetRecord {
        match self {
            Self::Create(record) | Self::Update(record) => record,
        }
    }

    pub fn operation(&self) -> OperationKind {
        match self {
            Self::Create(_) => OperationKind::CreateAsset,
            Self::Update(_) => OperationKind::UpdateAsset,
        }
    }

    /// "create" / "update"。
    pub fn action(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(_) => "update",
        }
    }
}

/// 由表单值与原始记录构造提交记录。
///
/// 以原始记录的副本为起点，保留表单不编辑的字段（status 及未知字段），
/// 覆盖名称/地址/端口/位置名称与全部引用字段。坐标按存储顺序原样写入
/// `geo.coordinates`，不做经纬度重排。
pub fn build_submission(values: &FormState, original: Option<&AssetRecord>) -> Submission {
    let mut record = original.cloned().unwrap_or_default();

    record.address = values.address.clone();
    record.name = values.name.clone();
    record.port = values.port.clone();
    record.location_name = values.location_name.clone();
    record.device_type_id = values
        .device_type_id_selection
        .as_ref()
        .map(|option| option.id.clone());
    record.edge_id = values
        .edge_id_selection
        .as_ref()
        .map(|option| option.id.clone());
    record.uplink_asset_id = values
        .uplink_asset_id_selection
        .as_ref()
        .map(|option| option.id.clone());
    record.group_ids = values
        .group_ids_selection
        .iter()
        .map(|option| option.id.clone())
        .collect();

    if let Some(lat_lng) = values.location_lat_lng {
        record.geo = Some(Geo::point(lat_lng));
    }

    if record.id.is_some() {
        Submission::Update(record)
    } else {
        Submission::Create(record)
    }
}

/// 按提交类型下发 create 或 update（fire-and-forget）。
pub fn dispatch_submission(dispatcher: &dyn AssetDispatcher, submission: Submission) {
    info!(
        target: "nms.editor",
        action = submission.action(),
        asset_id = ?submission.record().id.as_ref().map(|id| id.to_string()),
        asset_name = %submission.record().name,
        "asset_submit_dispatch"
    );
    match submission {
        Submission::Create(record) => dispatcher.create_asset(record),
        Submission::Update(record) => dispatcher.update_asset(record),
    }
}
