//! 地图中心状态机。
//!
//! 地图中心只在首次观察到带坐标的记录时初始化一次，之后重新解析记录不会再
//! 改动它；用户拖动地图（onCenter）则总是覆盖。

use domain::LatLng;
use serde::Serialize;

/// 地图中心：`Uninitialized` → `Initialized(center)`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "center", rename_all = "snake_case")]
pub enum MapCenter {
    #[default]
    Uninitialized,
    Initialized(LatLng),
}

impl MapCenter {
    /// 观察一次记录坐标；仅在未初始化时生效。返回是否发生了状态迁移。
    pub fn observe(&mut self, geo_point: Option<LatLng>) -> bool {
        match (*self, geo_point) {
            (Self::Uninitialized, Some(point)) => {
                *self = Self::Initialized(point);
                true
            }
            _ => false,
        }
    }

    /// 地图控件回报的新中心。
    pub fn recenter(&mut self, center: LatLng) {
        *self = Self::Initialized(center);
    }

    pub fn center(&self) -> Option<LatLng> {
        match self {
            Self::Uninitialized => None,
            Self::Initialized(center) => Some(*center),
        }
    }
}
