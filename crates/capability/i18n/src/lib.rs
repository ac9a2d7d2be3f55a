//! 文案翻译：`t(key, params)`。
//!
//! 编辑器所有面向用户的文案（动作标题、字段名、校验错误）都经由
//! [`Translator`] 获取，调用方注入具体实现。
//!
//! ```ignore
//! let t = StaticTranslator::builtin("zh-CN");
//! let label = t.translate("updateItem", &Params::new().with("item", t.t("asset")));
//! assert_eq!(label, "更新资产");
//! ```

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// 默认回退语言。
pub const FALLBACK_LOCALE: &str = "en";

/// 插值参数，按插入顺序保存。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 追加一个参数（builder 形式）。
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 翻译接口。
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, params: &Params) -> String;

    /// 无参数翻译。
    fn t(&self, key: &str) -> String {
        self.translate(key, &Params::new())
    }
}

/// 闭包直接作为翻译器使用（测试常用）。
impl<F> Translator for F
where
    F: Fn(&str, &Params) -> String + Send + Sync,
{
    fn translate(&self, key: &str, params: &Params) -> String {
        (self)(key, params)
    }
}

/// 内置词条：(key, en, zh-CN)。
const BUILTIN: &[(&str, &str, &str)] = &[
    ("mandatory", "This field is mandatory", "此项为必填项"),
    ("invalidIP", "Invalid IP address", "IP 地址格式错误"),
    ("invalidPort", "Invalid port", "端口无效"),
    ("createItem", "Create {{item}}", "新建{{item}}"),
    ("updateItem", "Update {{item}}", "更新{{item}}"),
    ("asset", "asset", "资产"),
    ("assetStatus", "Asset status", "资产状态"),
    ("deviceType", "Device type", "设备类型"),
    ("name", "Name", "名称"),
    ("networkAddress", "Network address", "网络地址"),
    ("port", "Port", "端口"),
    ("edge", "Edge", "边缘节点"),
    ("uplinkAsset", "Uplink asset", "上联资产"),
    ("assetsGroups", "Asset groups", "资产分组"),
];

/// 基于静态词表的翻译器。
///
/// - 当前语言缺少词条时回退到 `en`
/// - 仍缺失时原样返回 key
pub struct StaticTranslator {
    catalogs: HashMap<String, HashMap<String, String>>,
    locale: RwLock<String>,
}

impl StaticTranslator {
    /// 创建空词表翻译器。
    pub fn new(locale: &str) -> Self {
        Self {
            catalogs: HashMap::new(),
            locale: RwLock::new(locale.to_string()),
        }
    }

    /// 创建带内置 en / zh-CN 词表的翻译器。
    pub fn builtin(locale: &str) -> Self {
        let mut translator = Self::new(locale);
        for (key, en, zh) in BUILTIN {
            translator.insert("en", key, en);
            translator.insert("zh-CN", key, zh);
        }
        translator
    }

    /// 添加或覆盖词条。
    pub fn insert(&mut self, locale: &str, key: &str, template: &str) {
        self.catalogs
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
    }

    pub fn set_locale(&self, locale: &str) {
        match self.locale.write() {
            Ok(mut current) => *current = locale.to_string(),
            Err(poisoned) => *poisoned.into_inner() = locale.to_string(),
        }
    }

    pub fn locale(&self) -> String {
        match self.locale.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.catalogs
            .get(locale)
            .and_then(|catalog| catalog.get(key))
            .map(String::as_str)
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str, params: &Params) -> String {
        let locale = self.locale();
        let template = self
            .lookup(&locale, key)
            .or_else(|| self.lookup(FALLBACK_LOCALE, key));
        match template {
            Some(template) => interpolate(template, params),
            None => {
                debug!(target: "nms.i18n", key, locale = %locale, "missing translation");
                key.to_string()
            }
        }
    }
}

/// 替换模板中的 `{{name}}` 占位符；未提供的参数保留原样。
fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    let mut output = template.to_string();
    for (key, value) in params.iter() {
        output = output.replace(&format!("{{{{{key}}}}}"), value);
    }
    output
}
