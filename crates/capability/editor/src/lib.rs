//! # 资产编辑器
//!
//! 新建/更新网络资产的表单逻辑，协作方（状态存储、动作下发、翻译）全部显式注入。
//!
//! ## 数据流
//!
//! ```text
//! 加载：AssetRecord + EditorOptions ──resolve_form──▶ LoadedForm(FormState)
//!                                                        │
//!                                             FormSession（修改 / touched / dirty）
//!                                                        │
//! 提交：FormState + 原始 AssetRecord ──build_submission──▶ Submission
//!                                                        │
//!                                        AssetDispatcher::create_asset / update_asset
//! ```
//!
//! ## 模块说明
//!
//! - [`form`]：表单状态、字段、字段变更事件
//! - [`options`]：选项列表与引用解析
//! - [`mapper`]：加载路径（记录 → 表单）
//! - [`validate`]：字段校验
//! - [`submit`]：提交路径（表单 → 记录）
//! - [`session`]：表单会话（touched、dirty、重置、提交）
//! - [`map_center`]：地图中心一次性初始化状态机
//! - [`lifecycle`]：挂载期间的轮询刷新
//! - [`editor`]：组合以上部分的编辑器与视图
//!
//! ## 约束
//!
//! - 加载、校验、提交映射均为纯函数，不读取任何全局状态
//! - 下发动作 fire-and-forget，编辑器不等待存储层结果
//! - 卸载后不会再触发任何刷新下发

pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod map_center;
pub mod mapper;
pub mod options;
pub mod session;
pub mod submit;
pub mod validate;

pub use dispatcher::{AssetDispatcher, NoopDispatcher};
pub use editor::{AssetEditor, EditorEvent, EditorSettings, EditorView};
pub use error::EditorError;
pub use form::{ErrorMap, FieldChange, FormField, FormState};
pub use lifecycle::PollingLifecycle;
pub use map_center::MapCenter;
pub use mapper::{EditorMode, LoadedForm, action_label, resolve_form};
pub use options::{EditorOptions, find_option, select_groups, uplink_candidates};
pub use session::FormSession;
pub use submit::{Submission, build_submission, dispatch_submission};
pub use validate::validate_form;
