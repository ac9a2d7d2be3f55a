//! # NMS Storage 模块
//!
//! 资产编辑器调用层的数据存储抽象与客户端状态。
//!
//! ## 模块说明
//!
//! - [`models`]：分组、设备类型、边缘节点等引用数据模型
//! - [`traits`]：后端存储接口 [`AssetStore`]（使用 async_trait 支持动态分发）
//! - [`error`]：存储错误类型
//! - [`in_memory`]：内存存储实现（`RwLock<HashMap>`，用于测试和演示）
//! - [`state`]：客户端状态缓存与选项选择器（编辑器的数据来源）
//! - [`tracker`]：按请求类型跟踪 create/update/fetch 的进行状态
//!
//! ## 设计约束
//!
//! - 编辑器不直接访问存储，只通过 `ClientState` 的选择器取数据
//! - 资产 ID 由存储层分配；创建时带 ID 视为非法请求
//! - 资产的上联资产不能是自身

pub mod error;
pub mod in_memory;
pub mod models;
pub mod state;
pub mod tracker;
pub mod traits;

pub use error::*;
pub use in_memory::InMemoryAssetStore;
pub use models::*;
pub use state::ClientState;
pub use tracker::{Generation, RequestStatus, RequestTracker};
pub use traits::*;
