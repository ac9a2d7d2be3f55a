//! 资产编辑器 HTTP 服务入口。

use nms_api::{AppState, build_app};
use nms_config::AppConfig;
use nms_dispatch::StoreDispatcher;
use nms_i18n::StaticTranslator;
use nms_storage::{ClientState, InMemoryAssetStore, RequestTracker};
use nms_telemetry::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 内存资产存储（带演示数据）
    let store = Arc::new(InMemoryAssetStore::with_demo_data());
    let client_state = Arc::new(ClientState::new(config.default_location));
    let tracker = Arc::new(RequestTracker::new());
    let dispatcher = StoreDispatcher::new(store, client_state, tracker)?;
    // 设备类型与边缘节点只在启动时加载；资产与分组由编辑器轮询刷新
    dispatcher.load_reference_data().await?;
    dispatcher.load_assets().await?;
    dispatcher.load_groups().await?;

    let translator = Arc::new(StaticTranslator::builtin(&config.locale));
    let state = AppState::new(
        dispatcher,
        translator,
        config.polling_interval(),
        config.session_idle_timeout(),
    );
    // 回收客户端遗弃的会话，避免其无限轮询
    state.spawn_session_sweeper();
    let app = build_app(state);

    info!(
        target: "nms.api",
        http_addr = %config.http_addr,
        polling_interval_ms = config.polling_interval_ms,
        session_idle_timeout_ms = config.session_idle_timeout_ms,
        locale = %config.locale,
        "server_starting"
    );
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
