//! 表单会话：当前值、touched 字段、dirty 判断、重置与提交。

use crate::dispatcher::AssetDispatcher;
use crate::error::EditorError;
use crate::form::{ErrorMap, FieldChange, FormField, FormState};
use crate::submit::{Submission, build_submission, dispatch_submission};
use crate::validate::validate_form;
use domain::AssetRecord;
use nms_i18n::Translator;
use std::collections::BTreeSet;
use tracing::debug;

/// 表单会话。
///
/// - `derived`：最近一次由记录解析出的初始值，用于判断是否需要重新初始化
/// - `initial`：dirty 判断的基线（重置或提交成功后更新）
/// - `values`：当前编辑中的值
#[derive(Debug, Clone)]
pub struct FormSession {
    derived: FormState,
    initial: FormState,
    values: FormState,
    touched: BTreeSet<FormField>,
    submit_attempted: bool,
}

impl FormSession {
    pub fn new(initial: FormState) -> Self {
        Self {
            derived: initial.clone(),
            initial: initial.clone(),
            values: initial,
            touched: BTreeSet::new(),
            submit_attempted: false,
        }
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn initial(&self) -> &FormState {
        &self.initial
    }

    /// 重新解析得到的初始值与上一次不同时，重置表单到新初始值。
    ///
    /// 返回是否发生了重置。
    pub fn reinitialize(&mut self, derived: FormState) -> bool {
        if derived == self.derived {
            return false;
        }
        debug!(target: "nms.editor", "form_reinitialized");
        self.derived = derived.clone();
        self.reset_to(derived);
        true
    }

    /// 应用字段变更并标记相关字段为 touched。
    pub fn apply(&mut self, change: FieldChange) {
        self.touched.extend(change.fields().iter().copied());
        change.apply(&mut self.values);
    }

    pub fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// 放弃修改，回到初始值。
    pub fn reset(&mut self) {
        let initial = self.initial.clone();
        self.reset_to(initial);
    }

    /// 全部字段错误。
    pub fn errors(&self, t: &dyn Translator) -> ErrorMap {
        validate_form(&self.values, t)
    }

    /// 需要展示的错误：字段已 touched，或已尝试过提交。
    pub fn visible_errors(&self, t: &dyn Translator) -> ErrorMap {
        let mut errors = self.errors(t);
        if !self.submit_attempted {
            errors.retain(|field, _| self.touched.contains(field));
        }
        errors
    }

    /// 提交表单。
    ///
    /// 校验失败时标记全部字段为 touched 并返回错误，不下发任何动作；
    /// 校验通过时按记录是否带 ID 下发 update/create，随后以提交值重置表单
    /// （dirty 清零），不等待下发结果。
    pub fn submit(
        &mut self,
        original: Option<&AssetRecord>,
        dispatcher: &dyn AssetDispatcher,
        t: &dyn Translator,
    ) -> Result<Submission, EditorError> {
        self.submit_attempted = true;
        self.touched.extend(FormField::ALL);

        let errors = self.errors(t);
        if !errors.is_empty() {
            return Err(EditorError::Validation(errors));
        }

        let submission = build_submission(&self.values, original);
        dispatch_submission(dispatcher, submission.clone());

        let submitted = self.values.clone();
        self.reset_to(submitted);
        Ok(submission)
    }

    fn reset_to(&mut self, values: FormState) {
        self.initial = values.clone();
        self.values = values;
        self.touched.clear();
        self.submit_attempted = false;
    }
}
