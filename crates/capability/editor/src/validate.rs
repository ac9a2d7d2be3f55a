//! 表单字段校验。

use crate::form::{ErrorMap, FormField, FormState};
use nms_i18n::Translator;
use nms_network::{is_valid_ip_address, is_valid_port};

/// 校验表单，返回字段 → 本地化错误文案。
///
/// 各字段规则相互独立，不会因某个字段出错而跳过其他字段：
/// - name：必填
/// - address：必填，且为 IPv4/IPv6 地址
/// - port：必填，且为 1-65535 的整数
/// - deviceTypeIdSelection：必填
///
/// 其余字段（边缘节点、上联资产、分组、位置）均为可选。
pub fn validate_form(values: &FormState, t: &dyn Translator) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_blank(&values.name) {
        errors.insert(FormField::Name, t.t("mandatory"));
    }

    if is_blank(&values.address) {
        errors.insert(FormField::Address, t.t("mandatory"));
    } else if !is_valid_ip_address(&values.address) {
        errors.insert(FormField::Address, t.t("invalidIP"));
    }

    if is_blank(&values.port) {
        errors.insert(FormField::Port, t.t("mandatory"));
    } else if !is_valid_port(&values.port) {
        errors.insert(FormField::Port, t.t("invalidPort"));
    }

    if values.device_type_id_selection.is_none() {
        errors.insert(FormField::DeviceTypeIdSelection, t.t("mandatory"));
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
