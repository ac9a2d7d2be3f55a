//! 资产编辑器 HTTP 宿主。
//!
//! 一个编辑会话对应一个挂载中的 [`AssetEditor`]：创建会话即挂载（开始轮询），
//! 删除会话即卸载（停止轮询并重置请求状态）。

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use axum::Router;
use nms_dispatch::StoreDispatcher;
use nms_editor::AssetEditor;
use nms_i18n::Translator;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tower_http::trace::TraceLayer;
use tracing::info;

/// 一个挂载中的编辑会话。
pub struct SessionEntry {
    pub editor: AssetEditor,
    last_seen: Instant,
}

impl SessionEntry {
    pub fn new(editor: AssetEditor) -> Self {
        Self {
            editor,
            last_seen: Instant::now(),
        }
    }

    /// 记录一次访问。
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_seen)
    }
}

/// 会话表：session_id → 编辑会话。
pub type SessionMap = HashMap<String, SessionEntry>;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: StoreDispatcher,
    pub translator: Arc<dyn Translator>,
    pub polling_interval: Duration,
    /// 超过该时长未访问的会话由 [`AppState::evict_idle`] 卸载。
    pub session_idle_timeout: Duration,
    sessions: Arc<Mutex<SessionMap>>,
}

impl AppState {
    pub fn new(
        dispatcher: StoreDispatcher,
        translator: Arc<dyn Translator>,
        polling_interval: Duration,
        session_idle_timeout: Duration,
    ) -> Self {
        Self {
            dispatcher,
            translator,
            polling_interval,
            session_idle_timeout,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// 会话表（锁不得跨 await 持有）。
    pub fn sessions(&self) -> MutexGuard<'_, SessionMap> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// 卸载空闲超时的会话，返回卸载数量。
    ///
    /// 客户端不再访问也不删除的会话会一直轮询，需由此回收。
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let expired: Vec<(String, SessionEntry)> = {
            let mut sessions = self.sessions();
            let ids: Vec<String> = sessions
                .iter()
                .filter(|(_, entry)| entry.idle_for(now) >= self.session_idle_timeout)
                .map(|(id, _)| id.clone())
                .collect();
            ids.into_iter()
                .filter_map(|id| sessions.remove(&id).map(|entry| (id, entry)))
                .collect()
        };

        let count = expired.len();
        for (session_id, mut entry) in expired {
            entry.editor.unmount();
            info!(
                target: "nms.api",
                session_id = %session_id,
                idle_secs = entry.idle_for(now).as_secs(),
                "editor_session_expired"
            );
        }
        count
    }

    /// 启动后台回收任务，每个超时周期检查一次。
    pub fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        let state = self.clone();
        let period = self.session_idle_timeout;
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                state.evict_idle();
            }
        })
    }
}

/// 组装完整应用（路由 + 请求上下文 + HTTP 追踪）。
pub fn build_app(state: AppState) -> Router {
    routes::create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_context))
}
