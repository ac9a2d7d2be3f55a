//! 请求状态跟踪
//!
//! 按请求类型记录最近一次请求的进行状态，供调用层展示错误横幅或
//! 判断是否仍在进行中。编辑器卸载时会重置 create/update 两类状态。

use domain::OperationKind;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};
use tracing::debug;

/// 单类请求的状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    /// 失败信息（仅 Failed）。
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// 一次请求的凭据：`begin` 时发放，结果回写时出示。
pub type Generation = u64;

#[derive(Debug, Default)]
struct Entry {
    generation: Generation,
    status: RequestStatus,
}

/// 请求状态表。
///
/// 每类请求带一个代数，`reset` 使代数加一；此前发出、尚未完成的请求
/// 持有旧代数，其结果回写会被丢弃，不会在重置后重新出现。
#[derive(Debug, Default)]
pub struct RequestTracker {
    entries: RwLock<HashMap<OperationKind, Entry>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标记为进行中，返回本次请求的代数。
    pub fn begin(&self, kind: OperationKind) -> Generation {
        let mut entries = self.write();
        let entry = entries.entry(kind).or_default();
        entry.status = RequestStatus::Pending;
        log_status(kind, &entry.status);
        entry.generation
    }

    /// 回写成功；代数已过期时丢弃并返回 false。
    pub fn succeed(&self, kind: OperationKind, generation: Generation) -> bool {
        self.finish(kind, generation, RequestStatus::Succeeded)
    }

    /// 回写失败；代数已过期时丢弃并返回 false。
    pub fn fail(
        &self,
        kind: OperationKind,
        generation: Generation,
        message: impl Into<String>,
    ) -> bool {
        self.finish(kind, generation, RequestStatus::Failed(message.into()))
    }

    pub fn reset(&self, kind: OperationKind) {
        let mut entries = self.write();
        let entry = entries.entry(kind).or_default();
        entry.generation = entry.generation.wrapping_add(1);
        entry.status = RequestStatus::Idle;
        log_status(kind, &entry.status);
    }

    pub fn status(&self, kind: OperationKind) -> RequestStatus {
        let read = |map: &HashMap<OperationKind, Entry>| {
            map.get(&kind)
                .map(|entry| entry.status.clone())
                .unwrap_or_default()
        };
        match self.entries.read() {
            Ok(map) => read(&*map),
            Err(poisoned) => read(&*poisoned.into_inner()),
        }
    }

    fn finish(&self, kind: OperationKind, generation: Generation, status: RequestStatus) -> bool {
        let mut entries = self.write();
        let entry = entries.entry(kind).or_default();
        if entry.generation != generation {
            debug!(
                target: "nms.storage",
                operation = kind.as_str(),
                status = status.as_str(),
                generation,
                current = entry.generation,
                "stale_request_result_dropped"
            );
            return false;
        }
        log_status(kind, &status);
        entry.status = status;
        true
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<OperationKind, Entry>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn log_status(kind: OperationKind, status: &RequestStatus) {
    debug!(
        target: "nms.storage",
        operation = kind.as_str(),
        status = status.as_str(),
        "request_status"
    );
}
