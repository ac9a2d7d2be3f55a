//! 资产编辑器共享的领域模型。
//!
//! - [`RefId`]：宽松比较的引用 ID（字符串 / 数字 / `{"$oid": ...}`）
//! - [`AssetRecord`]：持久化的网络资产记录
//! - [`OptionItem`]：选择控件使用的 `{id, label}` 选项
//! - [`OperationKind`]：需要追踪请求生命周期的异步操作

pub mod asset;
pub mod operation;
pub mod option;
pub mod reference;

pub use asset::{AssetRecord, Geo, LatLng};
pub use operation::OperationKind;
pub use option::OptionItem;
pub use reference::RefId;
