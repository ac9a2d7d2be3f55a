mod common;

use common::{Action, RecordingDispatcher};
use domain::OperationKind;
use nms_editor::PollingLifecycle;
use std::sync::Arc;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(1_000);

#[tokio::test(start_paused = true)]
async fn mount_refreshes_immediately() {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let _lifecycle = PollingLifecycle::mount(dispatcher.clone(), INTERVAL);

    assert_eq!(
        dispatcher.actions(),
        vec![Action::FetchAssets, Action::FetchGroups]
    );
}

#[tokio::test(start_paused = true)]
async fn refresh_repeats_every_interval() {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let lifecycle = PollingLifecycle::mount(dispatcher.clone(), INTERVAL);

    tokio::time::sleep(INTERVAL * 2 + Duration::from_millis(10)).await;

    assert!(lifecycle.is_active());
    assert_eq!(dispatcher.count(&Action::FetchAssets), 3);
    assert_eq!(dispatcher.count(&Action::FetchGroups), 3);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_polling_and_resets_pending_operations() {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let mut lifecycle = PollingLifecycle::mount(dispatcher.clone(), INTERVAL);

    tokio::time::sleep(INTERVAL / 2).await;
    lifecycle.unmount();
    tokio::time::sleep(INTERVAL * 3).await;

    assert!(!lifecycle.is_active());
    assert_eq!(dispatcher.count(&Action::FetchAssets), 1);
    assert_eq!(
        dispatcher.count(&Action::Reset(OperationKind::CreateAsset)),
        1
    );
    assert_eq!(
        dispatcher.count(&Action::Reset(OperationKind::UpdateAsset)),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn unmount_is_idempotent_and_drop_does_not_repeat_cleanup() {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let mut lifecycle = PollingLifecycle::mount(dispatcher.clone(), INTERVAL);

    lifecycle.unmount();
    lifecycle.unmount();
    drop(lifecycle);

    assert_eq!(
        dispatcher.count(&Action::Reset(OperationKind::CreateAsset)),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn drop_unmounts() {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    {
        let _lifecycle = PollingLifecycle::mount(dispatcher.clone(), INTERVAL);
    }
    tokio::time::sleep(INTERVAL * 2).await;

    assert_eq!(dispatcher.count(&Action::FetchAssets), 1);
    assert_eq!(
        dispatcher.count(&Action::Reset(OperationKind::UpdateAsset)),
        1
    );
}
