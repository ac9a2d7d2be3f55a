//! 动作下发接口。

use domain::{AssetRecord, OperationKind, RefId};

/// 资产动作下发器抽象。
///
/// 所有方法均为 fire-and-forget：调用方不等待、也不消费结果，
/// 请求状态由调用层的请求追踪器维护。
pub trait AssetDispatcher: Send + Sync {
    fn create_asset(&self, record: AssetRecord);

    fn update_asset(&self, record: AssetRecord);

    fn fetch_asset(&self, id: RefId);

    fn fetch_assets(&self);

    fn fetch_groups(&self);

    /// 清除某类操作的 pending/错误状态。
    fn reset_pending_operation(&self, kind: OperationKind);
}

/// 空下发器（用于占位）。
#[derive(Debug, Default)]
pub struct NoopDispatcher;

impl AssetDispatcher for NoopDispatcher {
    fn create_asset(&self, _record: AssetRecord) {}

    fn update_asset(&self, _record: AssetRecord) {}

    fn fetch_asset(&self, _id: RefId) {}

    fn fetch_assets(&self) {}

    fn fetch_groups(&self) {}

    fn reset_pending_operation(&self, _kind: OperationKind) {}
}
