//! 资产内存存储实现
//!
//! 功能：
//! - 资产创建（分配 ID）、整体更新、查询
//! - 分组、设备类型、边缘节点的只读查询

use crate::error::StorageError;
use crate::models::{DeviceTypeRecord, EdgeRecord, GroupRecord};
use crate::traits::AssetStore;
use domain::{AssetRecord, Geo, LatLng, RefId};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// 资产内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储，键为 ID 的规范化字符串。
pub struct InMemoryAssetStore {
    assets: RwLock<HashMap<String, AssetRecord>>,
    groups: Vec<GroupRecord>,
    device_types: Vec<DeviceTypeRecord>,
    edges: Vec<EdgeRecord>,
}

impl InMemoryAssetStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_reference_data(Vec::new(), Vec::new(), Vec::new())
    }

    /// 使用给定的引用数据创建存储（资产为空）
    pub fn with_reference_data(
        groups: Vec<GroupRecord>,
        device_types: Vec<DeviceTypeRecord>,
        edges: Vec<EdgeRecord>,
    ) -> Self {
        Self {
            assets: RwLock::new(HashMap::new()),
            groups,
            device_types,
            edges,
        }
    }

    /// 创建带演示数据的存储
    pub fn with_demo_data() -> Self {
        let store = Self::with_reference_data(
            vec![
                group("grp-all", "All assets", false),
                group("grp-lab", "Lab", true),
                group("grp-prod", "Production", true),
            ],
            vec![
                DeviceTypeRecord {
                    id: RefId::from(1),
                    name: "Router".to_string(),
                },
                DeviceTypeRecord {
                    id: RefId::from(2),
                    name: "Switch".to_string(),
                },
                DeviceTypeRecord {
                    id: RefId::from(3),
                    name: "Firewall".to_string(),
                },
            ],
            vec![
                EdgeRecord {
                    id: RefId::from("edge-1"),
                    name: "Edge TLV".to_string(),
                },
                EdgeRecord {
                    id: RefId::from("edge-2"),
                    name: "Edge HFA".to_string(),
                },
            ],
        );

        let core = AssetRecord {
            id: Some(RefId::object_id("asset-core")),
            name: "core-router".to_string(),
            address: "10.0.0.1".to_string(),
            port: "161".to_string(),
            device_type_id: Some(RefId::from(1)),
            edge_id: Some(RefId::from("edge-1")),
            group_ids: vec![RefId::from("grp-prod")],
            location_name: Some("Data center".to_string()),
            geo: Some(Geo::point(LatLng(34.78, 32.08))),
            status: Some("online".to_string()),
            ..AssetRecord::default()
        };
        let access = AssetRecord {
            id: Some(RefId::object_id("asset-access")),
            name: "access-switch".to_string(),
            address: "10.0.1.2".to_string(),
            port: "161".to_string(),
            device_type_id: Some(RefId::from(2)),
            edge_id: Some(RefId::from("edge-1")),
            uplink_asset_id: Some(RefId::object_id("asset-core")),
            group_ids: vec![RefId::from("grp-lab")],
            status: Some("offline".to_string()),
            ..AssetRecord::default()
        };
        if let Ok(mut map) = store.assets.write() {
            for record in [core, access] {
                if let Some(id) = &record.id {
                    map.insert(id.key().into_owned(), record);
                }
            }
        }
        store
    }
}

impl Default for InMemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AssetStore for InMemoryAssetStore {
    /// 列出全部资产（按名称排序）
    async fn list_assets(&self) -> Result<Vec<AssetRecord>, StorageError> {
        let mut items: Vec<AssetRecord> = self
            .assets
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// 查找指定资产
    async fn find_asset(&self, id: &RefId) -> Result<Option<AssetRecord>, StorageError> {
        let item = self
            .assets
            .read()
            .ok()
            .and_then(|map| map.get(id.key().as_ref()).cloned());
        Ok(item)
    }

    /// 创建资产
    async fn create_asset(&self, mut record: AssetRecord) -> Result<AssetRecord, StorageError> {
        if record.id.is_some() {
            return Err(StorageError::Invalid("new asset must not carry an id".to_string()));
        }
        let id = RefId::object_id(Uuid::new_v4().simple().to_string());
        let key = id.key().into_owned();
        record.id = Some(id);

        let mut map = self
            .assets
            .write()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        map.insert(key.clone(), record.clone());
        debug!(target: "nms.storage", asset_id = %key, "asset_created");
        Ok(record)
    }

    /// 更新资产
    async fn update_asset(&self, record: AssetRecord) -> Result<AssetRecord, StorageError> {
        let Some(id) = record.id.clone() else {
            return Err(StorageError::Invalid("asset id is required".to_string()));
        };
        if record.uplink_asset_id.as_ref() == Some(&id) {
            return Err(StorageError::Invalid(
                "asset cannot be its own uplink".to_string(),
            ));
        }

        let key = id.key().into_owned();
        let mut map = self
            .assets
            .write()
            .map_err(|_| StorageError::Unavailable("lock failed".to_string()))?;
        let Some(existing) = map.get_mut(&key) else {
            return Err(StorageError::NotFound(format!("asset {key}")));
        };
        *existing = record.clone();
        debug!(target: "nms.storage", asset_id = %key, "asset_updated");
        Ok(record)
    }

    async fn list_groups(&self) -> Result<Vec<GroupRecord>, StorageError> {
        Ok(self.groups.clone())
    }

    async fn list_device_types(&self) -> Result<Vec<DeviceTypeRecord>, StorageError> {
        Ok(self.device_types.clone())
    }

    async fn list_edges(&self) -> Result<Vec<EdgeRecord>, StorageError> {
        Ok(self.edges.clone())
    }
}

fn group(id: &str, name: &str, custom: bool) -> GroupRecord {
    GroupRecord {
        id: RefId::from(id),
        name: name.to_string(),
        custom,
    }
}
