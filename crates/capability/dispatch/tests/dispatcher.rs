use async_trait::async_trait;
use domain::{AssetRecord, LatLng, OperationKind, RefId};
use nms_dispatch::{DispatchError, StoreDispatcher};
use nms_editor::{AssetDispatcher, PollingLifecycle};
use nms_storage::{
    AssetStore, ClientState, DeviceTypeRecord, EdgeRecord, GroupRecord, InMemoryAssetStore,
    RequestStatus, RequestTracker, StorageError,
};
use std::sync::Arc;
use std::time::Duration;

fn dispatcher(store: Arc<dyn AssetStore>) -> StoreDispatcher {
    StoreDispatcher::new(
        store,
        Arc::new(ClientState::new(LatLng::default())),
        Arc::new(RequestTracker::new()),
    )
    .expect("runtime")
}

fn draft() -> AssetRecord {
    AssetRecord {
        name: "r9".to_string(),
        address: "10.9.9.9".to_string(),
        port: "830".to_string(),
        device_type_id: Some(RefId::from(1)),
        ..AssetRecord::default()
    }
}

/// 等待后台任务把请求状态推进到终态。
async fn settle(dispatcher: &StoreDispatcher, kind: OperationKind) -> RequestStatus {
    for _ in 0..100 {
        let status = dispatcher.tracker().status(kind);
        if matches!(status, RequestStatus::Succeeded | RequestStatus::Failed(_)) {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    dispatcher.tracker().status(kind)
}

struct FailingStore;

#[async_trait]
impl AssetStore for FailingStore {
    async fn list_assets(&self) -> Result<Vec<AssetRecord>, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    async fn find_asset(&self, _id: &RefId) -> Result<Option<AssetRecord>, StorageError> {
        Ok(None)
    }

    async fn create_asset(&self, _record: AssetRecord) -> Result<AssetRecord, StorageError> {
        Err(StorageError::Invalid("duplicate name".to_string()))
    }

    async fn update_asset(&self, _record: AssetRecord) -> Result<AssetRecord, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    async fn list_groups(&self) -> Result<Vec<GroupRecord>, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    async fn list_device_types(&self) -> Result<Vec<DeviceTypeRecord>, StorageError> {
        Ok(Vec::new())
    }

    async fn list_edges(&self) -> Result<Vec<EdgeRecord>, StorageError> {
        Ok(Vec::new())
    }
}

#[test]
fn new_requires_a_runtime() {
    let result = StoreDispatcher::new(
        Arc::new(InMemoryAssetStore::new()),
        Arc::new(ClientState::new(LatLng::default())),
        Arc::new(RequestTracker::new()),
    );
    assert!(matches!(result, Err(DispatchError::Runtime(_))));
}

#[tokio::test]
async fn fetches_fill_client_state() {
    let dispatcher = dispatcher(Arc::new(InMemoryAssetStore::with_demo_data()));
    dispatcher.load_reference_data().await.expect("reference data");

    dispatcher.fetch_assets();
    dispatcher.fetch_groups();

    assert_eq!(
        settle(&dispatcher, OperationKind::FetchAssets).await,
        RequestStatus::Succeeded
    );
    assert_eq!(
        settle(&dispatcher, OperationKind::FetchGroups).await,
        RequestStatus::Succeeded
    );
    let options = dispatcher.state().editor_options();
    assert_eq!(options.asset_options.len(), 2);
    assert_eq!(options.group_options.len(), 2);
    assert_eq!(options.device_options.len(), 3);
    assert_eq!(options.edge_options.len(), 2);
}

#[tokio::test]
async fn create_dispatch_stores_new_asset() {
    let dispatcher = dispatcher(Arc::new(InMemoryAssetStore::new()));

    dispatcher.create_asset(draft());

    assert_eq!(
        settle(&dispatcher, OperationKind::CreateAsset).await,
        RequestStatus::Succeeded
    );
    let assets = dispatcher.state().assets();
    assert_eq!(assets.len(), 1);
    assert!(assets[0].id.is_some());
    assert_eq!(assets[0].name, "r9");
}

#[tokio::test]
async fn update_replaces_cached_asset() {
    let dispatcher = dispatcher(Arc::new(InMemoryAssetStore::with_demo_data()));
    dispatcher.load_assets().await.expect("assets");

    let mut record = dispatcher
        .state()
        .find_asset(&RefId::from("asset-core"))
        .expect("cached");
    record.port = "830".to_string();
    let updated = dispatcher.update(record).await.expect("update");

    assert_eq!(updated.port, "830");
    let cached = dispatcher
        .state()
        .find_asset(&RefId::from("asset-core"))
        .expect("cached");
    assert_eq!(cached.port, "830");
    assert_eq!(
        dispatcher.tracker().status(OperationKind::UpdateAsset),
        RequestStatus::Succeeded
    );
}

#[tokio::test]
async fn fetch_single_asset_reports_missing_record() {
    let dispatcher = dispatcher(Arc::new(InMemoryAssetStore::with_demo_data()));

    let found = dispatcher
        .load_asset(RefId::object_id("asset-access"))
        .await
        .expect("found");
    assert_eq!(found.name, "access-switch");
    assert_eq!(dispatcher.state().assets().len(), 1);

    let err = dispatcher
        .load_asset(RefId::from("nope"))
        .await
        .expect_err("missing");
    assert!(matches!(err, DispatchError::Storage(StorageError::NotFound(_))));
}

#[tokio::test]
async fn failures_are_tracked_and_reset() {
    let dispatcher = dispatcher(Arc::new(FailingStore));

    dispatcher.create_asset(draft());
    let status = settle(&dispatcher, OperationKind::CreateAsset).await;
    assert_eq!(status.error(), Some("invalid request: duplicate name"));
    assert!(dispatcher.state().assets().is_empty());

    dispatcher.reset_pending_operation(OperationKind::CreateAsset);
    assert_eq!(
        dispatcher.tracker().status(OperationKind::CreateAsset),
        RequestStatus::Idle
    );

    let err = dispatcher.load_groups().await.expect_err("offline");
    assert_eq!(err.to_string(), "storage error: storage unavailable: offline");
}

#[tokio::test]
async fn results_landing_after_unmount_do_not_resurface() {
    let dispatcher = dispatcher(Arc::new(InMemoryAssetStore::new()));
    let mut lifecycle = PollingLifecycle::mount(
        Arc::new(dispatcher.clone()),
        Duration::from_secs(30),
    );

    dispatcher.update_asset(AssetRecord {
        id: Some(RefId::from("gone")),
        ..draft()
    });
    dispatcher.create_asset(draft());
    assert_eq!(
        dispatcher.tracker().status(OperationKind::UpdateAsset),
        RequestStatus::Pending
    );
    lifecycle.unmount();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        dispatcher.tracker().status(OperationKind::UpdateAsset),
        RequestStatus::Idle
    );
    assert_eq!(
        dispatcher.tracker().status(OperationKind::CreateAsset),
        RequestStatus::Idle
    );
    // 重置不影响数据本身：创建已落库并进入缓存
    assert_eq!(dispatcher.state().assets().len(), 1);

    // 重置之后发起的请求照常记录
    dispatcher.update_asset(AssetRecord {
        id: Some(RefId::from("gone")),
        ..draft()
    });
    let status = settle(&dispatcher, OperationKind::UpdateAsset).await;
    assert_eq!(status.error(), Some("asset gone not found"));
}
