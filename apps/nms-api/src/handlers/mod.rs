//! Handlers 模块

pub mod health;
pub mod metrics;
pub mod options;
pub mod sessions;

pub use health::*;
pub use metrics::*;
pub use options::*;
pub use sessions::*;
