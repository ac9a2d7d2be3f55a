//! 挂载期间的轮询刷新。
//!
//! 挂载时立即刷新资产列表与分组列表，之后每个轮询间隔重复一次；
//! 卸载时同步取消定时任务，并重置新建/更新资产两类请求状态。

use crate::dispatcher::AssetDispatcher;
use domain::OperationKind;
use nms_telemetry::{record_editor_mounted, record_editor_unmounted};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

/// 卸载时需要重置的请求类型。
const RESET_ON_UNMOUNT: [OperationKind; 2] =
    [OperationKind::CreateAsset, OperationKind::UpdateAsset];

/// 轮询生命周期（每次挂载一个实例）。
///
/// `unmount` 与 `Drop` 共用同一清理逻辑，清理只执行一次。
pub struct PollingLifecycle {
    dispatcher: Arc<dyn AssetDispatcher>,
    /// 为 true 表示仍处于挂载状态；定时回调在持锁期间下发刷新。
    active: Arc<Mutex<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl PollingLifecycle {
    /// 挂载：立即刷新一次并启动定时刷新。
    ///
    /// 必须在 Tokio 运行时内调用。
    pub fn mount(dispatcher: Arc<dyn AssetDispatcher>, interval: Duration) -> Self {
        let period = interval.max(Duration::from_millis(1));
        let active = Arc::new(Mutex::new(true));

        refresh(dispatcher.as_ref());

        let task_dispatcher = Arc::clone(&dispatcher);
        let task_active = Arc::clone(&active);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let active = lock(&task_active);
                if !*active {
                    break;
                }
                debug!(target: "nms.editor", "polling_refresh");
                refresh(task_dispatcher.as_ref());
            }
        });

        record_editor_mounted();
        info!(
            target: "nms.editor",
            interval_ms = period.as_millis() as u64,
            "editor_mounted"
        );

        Self {
            dispatcher,
            active,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// 卸载：取消定时刷新并重置请求状态。重复调用无副作用。
    ///
    /// 返回后不会再有任何刷新下发。
    pub fn unmount(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        // 持锁置位：正在执行的回调先完成，后续回调看到 false 直接退出。
        *lock(&self.active) = false;
        handle.abort();

        for kind in RESET_ON_UNMOUNT {
            self.dispatcher.reset_pending_operation(kind);
        }

        record_editor_unmounted();
        info!(target: "nms.editor", "editor_unmounted");
    }
}

impl Drop for PollingLifecycle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn refresh(dispatcher: &dyn AssetDispatcher) {
    dispatcher.fetch_assets();
    dispatcher.fetch_groups();
}

fn lock(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    match flag.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
