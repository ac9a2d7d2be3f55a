//! 引用 ID。
//!
//! 上游返回的 ID 形态不统一：可能是字符串、数字，也可能是
//! `{"$oid": "..."}` 包装对象。解析引用时统一按字符串形式比较，
//! 因此 `PartialEq`/`Hash` 都基于 [`RefId::key`]。数字原样保留
//! （浮点、超出 i64 的整数均可），按其 JSON 文本比较。

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 引用 ID（宽松相等）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefId {
    Text(String),
    Number(serde_json::Number),
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RefId {
    /// 包装为 `{"$oid": ...}` 形式的 ID。
    pub fn object_id(oid: impl Into<String>) -> Self {
        Self::ObjectId { oid: oid.into() }
    }

    /// 字符串规范化后的比较键。
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value.as_str()),
            Self::Number(value) => Cow::Owned(value.to_string()),
            Self::ObjectId { oid } => Cow::Borrowed(oid.as_str()),
        }
    }
}

impl PartialEq for RefId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RefId {}

impl Hash for RefId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<&str> for RefId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RefId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RefId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}
