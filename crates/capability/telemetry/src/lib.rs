//! 追踪初始化、编辑器计数指标与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub assets_refreshes: u64,
    pub groups_refreshes: u64,
    pub creates_dispatched: u64,
    pub updates_dispatched: u64,
    pub dispatch_failures: u64,
    pub validation_rejections: u64,
    pub editors_mounted: u64,
    pub editors_unmounted: u64,
}

/// 编辑器相关计数指标。
pub struct TelemetryMetrics {
    assets_refreshes: AtomicU64,
    groups_refreshes: AtomicU64,
    creates_dispatched: AtomicU64,
    updates_dispatched: AtomicU64,
    dispatch_failures: AtomicU64,
    validation_rejections: AtomicU64,
    editors_mounted: AtomicU64,
    editors_unmounted: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            assets_refreshes: AtomicU64::new(0),
            groups_refreshes: AtomicU64::new(0),
            creates_dispatched: AtomicU64::new(0),
            updates_dispatched: AtomicU64::new(0),
            dispatch_failures: AtomicU64::new(0),
            validation_rejections: AtomicU64::new(0),
            editors_mounted: AtomicU64::new(0),
            editors_unmounted: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            assets_refreshes: self.assets_refreshes.load(Ordering::Relaxed),
            groups_refreshes: self.groups_refreshes.load(Ordering::Relaxed),
            creates_dispatched: self.creates_dispatched.load(Ordering::Relaxed),
            updates_dispatched: self.updates_dispatched.load(Ordering::Relaxed),
            dispatch_failures: self.dispatch_failures.load(Ordering::Relaxed),
            validation_rejections: self.validation_rejections.load(Ordering::Relaxed),
            editors_mounted: self.editors_mounted.load(Ordering::Relaxed),
            editors_unmounted: self.editors_unmounted.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录资产列表刷新次数。
pub fn record_assets_refresh() {
    metrics().assets_refreshes.fetch_add(1, Ordering::Relaxed);
}

/// 记录分组列表刷新次数。
pub fn record_groups_refresh() {
    metrics().groups_refreshes.fetch_add(1, Ordering::Relaxed);
}

/// 记录新建资产下发次数。
pub fn record_create_dispatched() {
    metrics().creates_dispatched.fetch_add(1, Ordering::Relaxed);
}

/// 记录更新资产下发次数。
pub fn record_update_dispatched() {
    metrics().updates_dispatched.fetch_add(1, Ordering::Relaxed);
}

/// 记录下发失败次数（存储层拒绝或出错）。
pub fn record_dispatch_failure() {
    metrics().dispatch_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录提交因校验失败被拦截的次数。
pub fn record_validation_rejection() {
    metrics()
        .validation_rejections
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录编辑器挂载次数。
pub fn record_editor_mounted() {
    metrics().editors_mounted.fetch_add(1, Ordering::Relaxed);
}

/// 记录编辑器卸载次数。
pub fn record_editor_unmounted() {
    metrics().editors_unmounted.fetch_add(1, Ordering::Relaxed);
}
