//! 存储层错误类型

/// 存储错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// 记录不存在。
    #[error("{0} not found")]
    NotFound(String),
    /// 请求内容不合法（例如创建时携带 ID）。
    #[error("invalid request: {0}")]
    Invalid(String),
    /// 锁中毒等内部错误。
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
