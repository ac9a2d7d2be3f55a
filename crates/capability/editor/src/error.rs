//! 编辑器错误类型。

use crate::form::{ErrorMap, FormField};

/// 编辑器错误。
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// 字段校验未通过，提交被拦截。
    #[error("validation failed: {}", field_list(.0))]
    Validation(ErrorMap),
}

impl EditorError {
    /// 字段级错误（无则为空）。
    pub fn field_errors(&self) -> &ErrorMap {
        match self {
            Self::Validation(errors) => errors,
        }
    }
}

fn field_list(errors: &ErrorMap) -> String {
    errors
        .keys()
        .map(FormField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
