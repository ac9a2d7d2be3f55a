//! 存储接口 Trait 定义
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{DeviceTypeRecord, EdgeRecord, GroupRecord};
use async_trait::async_trait;
use domain::{AssetRecord, RefId};

/// 资产存储接口
///
/// 资产 CRUD 以及编辑器所需引用数据的查询。
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// 列出全部资产
    async fn list_assets(&self) -> Result<Vec<AssetRecord>, StorageError>;

    /// 查找指定资产
    async fn find_asset(&self, id: &RefId) -> Result<Option<AssetRecord>, StorageError>;

    /// 创建资产，返回带新 ID 的记录
    async fn create_asset(&self, record: AssetRecord) -> Result<AssetRecord, StorageError>;

    /// 以提交的记录整体替换已有资产
    async fn update_asset(&self, record: AssetRecord) -> Result<AssetRecord, StorageError>;

    /// 列出全部分组
    async fn list_groups(&self) -> Result<Vec<GroupRecord>, StorageError>;

    /// 列出全部设备类型
    async fn list_device_types(&self) -> Result<Vec<DeviceTypeRecord>, StorageError>;

    /// 列出全部边缘节点
    async fn list_edges(&self) -> Result<Vec<EdgeRecord>, StorageError>;
}
