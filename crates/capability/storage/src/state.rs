//! 客户端状态缓存
//!
//! 保存最近一次拉取到的资产、分组、设备类型与边缘节点，并提供编辑器
//! 使用的选项选择器。由下发器在请求完成后写入。

use crate::models::{DeviceTypeRecord, EdgeRecord, GroupRecord};
use domain::{AssetRecord, LatLng, OptionItem, RefId};
use nms_editor::EditorOptions;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Cache {
    assets: Vec<AssetRecord>,
    groups: Vec<GroupRecord>,
    device_types: Vec<DeviceTypeRecord>,
    edges: Vec<EdgeRecord>,
}

/// 客户端状态。
#[derive(Debug)]
pub struct ClientState {
    cache: RwLock<Cache>,
    default_location: LatLng,
}

impl ClientState {
    pub fn new(default_location: LatLng) -> Self {
        Self {
            cache: RwLock::new(Cache::default()),
            default_location,
        }
    }

    pub fn set_assets(&self, assets: Vec<AssetRecord>) {
        self.write().assets = assets;
    }

    /// 写入单条资产（按宽松 ID 相等替换，不存在则追加）。
    pub fn upsert_asset(&self, record: AssetRecord) {
        let mut cache = self.write();
        match cache
            .assets
            .iter_mut()
            .find(|item| item.id.is_some() && item.id == record.id)
        {
            Some(existing) => *existing = record,
            None => cache.assets.push(record),
        }
    }

    pub fn set_groups(&self, groups: Vec<GroupRecord>) {
        self.write().groups = groups;
    }

    pub fn set_device_types(&self, device_types: Vec<DeviceTypeRecord>) {
        self.write().device_types = device_types;
    }

    pub fn set_edges(&self, edges: Vec<EdgeRecord>) {
        self.write().edges = edges;
    }

    pub fn assets(&self) -> Vec<AssetRecord> {
        self.read().assets.clone()
    }

    pub fn find_asset(&self, id: &RefId) -> Option<AssetRecord> {
        self.read()
            .assets
            .iter()
            .find(|item| item.id.as_ref() == Some(id))
            .cloned()
    }

    /// 资产选项（上联资产候选的来源）。
    pub fn asset_options(&self) -> Vec<OptionItem> {
        self.read()
            .assets
            .iter()
            .filter_map(|item| {
                item.id
                    .clone()
                    .map(|id| OptionItem::new(id, item.name.clone()))
            })
            .collect()
    }

    pub fn device_options(&self) -> Vec<OptionItem> {
        self.read()
            .device_types
            .iter()
            .map(|item| OptionItem::new(item.id.clone(), item.name.clone()))
            .collect()
    }

    pub fn edge_options(&self) -> Vec<OptionItem> {
        self.read()
            .edges
            .iter()
            .map(|item| OptionItem::new(item.id.clone(), item.name.clone()))
            .collect()
    }

    /// 仅自定义分组。
    pub fn custom_group_options(&self) -> Vec<OptionItem> {
        self.read()
            .groups
            .iter()
            .filter(|item| item.custom)
            .map(|item| OptionItem::new(item.id.clone(), item.name.clone()))
            .collect()
    }

    pub fn default_location(&self) -> LatLng {
        self.default_location
    }

    /// 编辑器所需的全部选项。
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            asset_options: self.asset_options(),
            device_options: self.device_options(),
            edge_options: self.edge_options(),
            group_options: self.custom_group_options(),
            default_location: self.default_location,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Cache> {
        match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cache> {
        match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
