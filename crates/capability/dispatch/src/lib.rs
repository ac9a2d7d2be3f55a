//! 基于存储的动作下发器。
//!
//! 编辑器下发的每个动作都在 Tokio 任务中执行：下发时即置为 Pending，
//! 完成后写回客户端状态，并把结果记录到请求状态表（已被重置的请求除外）。

use domain::{AssetRecord, OperationKind, RefId};
use nms_editor::AssetDispatcher;
use nms_storage::{AssetStore, ClientState, Generation, RequestTracker, StorageError};
use nms_telemetry::{
    record_assets_refresh, record_create_dispatched, record_dispatch_failure,
    record_groups_refresh, record_update_dispatched,
};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// 下发链路错误。
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// 基于 [`AssetStore`] 的下发器实现。
#[derive(Clone)]
pub struct StoreDispatcher {
    store: Arc<dyn AssetStore>,
    state: Arc<ClientState>,
    tracker: Arc<RequestTracker>,
    runtime: Handle,
}

impl StoreDispatcher {
    /// 创建下发器；必须在 Tokio 运行时内调用。
    pub fn new(
        store: Arc<dyn AssetStore>,
        state: Arc<ClientState>,
        tracker: Arc<RequestTracker>,
    ) -> Result<Self, DispatchError> {
        let runtime = Handle::try_current().map_err(|err| DispatchError::Runtime(err.to_string()))?;
        Ok(Self {
            store,
            state,
            tracker,
            runtime,
        })
    }

    pub fn state(&self) -> &Arc<ClientState> {
        &self.state
    }

    pub fn tracker(&self) -> &Arc<RequestTracker> {
        &self.tracker
    }

    /// 加载设备类型与边缘节点（启动时调用一次）。
    pub async fn load_reference_data(&self) -> Result<(), DispatchError> {
        let device_types = self.store.list_device_types().await?;
        let edges = self.store.list_edges().await?;
        info!(
            target: "nms.dispatch",
            device_types = device_types.len(),
            edges = edges.len(),
            "reference_data_loaded"
        );
        self.state.set_device_types(device_types);
        self.state.set_edges(edges);
        Ok(())
    }

    pub async fn create(&self, record: AssetRecord) -> Result<AssetRecord, DispatchError> {
        let generation = self.tracker.begin(OperationKind::CreateAsset);
        self.run_create(generation, record).await
    }

    pub async fn update(&self, record: AssetRecord) -> Result<AssetRecord, DispatchError> {
        let generation = self.tracker.begin(OperationKind::UpdateAsset);
        self.run_update(generation, record).await
    }

    pub async fn load_asset(&self, id: RefId) -> Result<AssetRecord, DispatchError> {
        let generation = self.tracker.begin(OperationKind::FetchAsset);
        self.run_load_asset(generation, id).await
    }

    pub async fn load_assets(&self) -> Result<usize, DispatchError> {
        let generation = self.tracker.begin(OperationKind::FetchAssets);
        self.run_load_assets(generation).await
    }

    pub async fn load_groups(&self) -> Result<usize, DispatchError> {
        let generation = self.tracker.begin(OperationKind::FetchGroups);
        self.run_load_groups(generation).await
    }

    async fn run_create(
        &self,
        generation: Generation,
        record: AssetRecord,
    ) -> Result<AssetRecord, DispatchError> {
        record_create_dispatched();
        let created = self
            .track(
                OperationKind::CreateAsset,
                generation,
                self.store.create_asset(record),
            )
            .await?;
        info!(
            target: "nms.dispatch",
            asset_id = ?created.id.as_ref().map(|id| id.to_string()),
            asset_name = %created.name,
            "asset_created"
        );
        self.state.upsert_asset(created.clone());
        Ok(created)
    }

    async fn run_update(
        &self,
        generation: Generation,
        record: AssetRecord,
    ) -> Result<AssetRecord, DispatchError> {
        record_update_dispatched();
        let updated = self
            .track(
                OperationKind::UpdateAsset,
                generation,
                self.store.update_asset(record),
            )
            .await?;
        info!(
            target: "nms.dispatch",
            asset_id = ?updated.id.as_ref().map(|id| id.to_string()),
            asset_name = %updated.name,
            "asset_updated"
        );
        self.state.upsert_asset(updated.clone());
        Ok(updated)
    }

    async fn run_load_asset(
        &self,
        generation: Generation,
        id: RefId,
    ) -> Result<AssetRecord, DispatchError> {
        let store = Arc::clone(&self.store);
        let found = self
            .track(OperationKind::FetchAsset, generation, async move {
                match store.find_asset(&id).await {
                    Ok(Some(record)) => Ok(record),
                    Ok(None) => Err(StorageError::NotFound(format!("asset {id}"))),
                    Err(err) => Err(err),
                }
            })
            .await?;
        self.state.upsert_asset(found.clone());
        Ok(found)
    }

    async fn run_load_assets(&self, generation: Generation) -> Result<usize, DispatchError> {
        let assets = self
            .track(OperationKind::FetchAssets, generation, self.store.list_assets())
            .await?;
        let count = assets.len();
        self.state.set_assets(assets);
        record_assets_refresh();
        Ok(count)
    }

    async fn run_load_groups(&self, generation: Generation) -> Result<usize, DispatchError> {
        let groups = self
            .track(OperationKind::FetchGroups, generation, self.store.list_groups())
            .await?;
        let count = groups.len();
        self.state.set_groups(groups);
        record_groups_refresh();
        Ok(count)
    }

    /// 等待一次存储请求并回写请求状态；`generation` 已被重置时结果不回写。
    async fn track<T, F>(
        &self,
        kind: OperationKind,
        generation: Generation,
        request: F,
    ) -> Result<T, DispatchError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        match request.await {
            Ok(value) => {
                self.tracker.succeed(kind, generation);
                Ok(value)
            }
            Err(err) => {
                record_dispatch_failure();
                warn!(
                    target: "nms.dispatch",
                    operation = kind.as_str(),
                    error = %err,
                    "dispatch_failed"
                );
                self.tracker.fail(kind, generation, err.to_string());
                Err(err.into())
            }
        }
    }

    fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(StoreDispatcher) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = job(self.clone());
        self.runtime.spawn(task);
    }
}

// 请求状态在下发时同步置为 Pending，早于任务开始执行；
// 之后的 reset 会使该任务的结果作废。
impl AssetDispatcher for StoreDispatcher {
    fn create_asset(&self, record: AssetRecord) {
        let generation = self.tracker.begin(OperationKind::CreateAsset);
        self.spawn(move |this| async move {
            let _ = this.run_create(generation, record).await;
        });
    }

    fn update_asset(&self, record: AssetRecord) {
        let generation = self.tracker.begin(OperationKind::UpdateAsset);
        self.spawn(move |this| async move {
            let _ = this.run_update(generation, record).await;
        });
    }

    fn fetch_asset(&self, id: RefId) {
        let generation = self.tracker.begin(OperationKind::FetchAsset);
        self.spawn(move |this| async move {
            let _ = this.run_load_asset(generation, id).await;
        });
    }

    fn fetch_assets(&self) {
        let generation = self.tracker.begin(OperationKind::FetchAssets);
        self.spawn(move |this| async move {
            let _ = this.run_load_assets(generation).await;
        });
    }

    fn fetch_groups(&self) {
        let generation = self.tracker.begin(OperationKind::FetchGroups);
        self.spawn(move |this| async move {
            let _ = this.run_load_groups(generation).await;
        });
    }

    fn reset_pending_operation(&self, kind: OperationKind) {
        self.tracker.reset(kind);
    }
}
