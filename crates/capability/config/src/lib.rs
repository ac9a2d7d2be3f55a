//! 应用运行配置加载。

use domain::LatLng;
use std::env;
use std::time::Duration;

/// 默认轮询间隔（毫秒）。
pub const DEFAULT_POLLING_INTERVAL_MS: u64 = 30_000;

/// 默认会话空闲超时（毫秒）：超时未访问的编辑会话会被卸载。
pub const DEFAULT_SESSION_IDLE_TIMEOUT_MS: u64 = 15 * 60 * 1000;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub polling_interval_ms: u64,
    pub session_idle_timeout_ms: u64,
    pub default_location: LatLng,
    pub locale: String,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("NMS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let polling_interval_ms =
            read_positive_u64_with_default("NMS_POLLING_INTERVAL_MS", DEFAULT_POLLING_INTERVAL_MS)?;
        let session_idle_timeout_ms = read_positive_u64_with_default(
            "NMS_SESSION_IDLE_TIMEOUT_MS",
            DEFAULT_SESSION_IDLE_TIMEOUT_MS,
        )?;
        let default_location = match read_optional("NMS_DEFAULT_LOCATION") {
            Some(value) => parse_location("NMS_DEFAULT_LOCATION", &value)?,
            None => LatLng(0.0, 0.0),
        };
        let locale = read_optional("NMS_LOCALE").unwrap_or_else(|| "en".to_string());

        Ok(Self {
            http_addr,
            polling_interval_ms,
            session_idle_timeout_ms,
            default_location,
            locale,
        })
    }

    /// 轮询间隔。
    pub fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.polling_interval_ms)
    }

    /// 会话空闲超时。
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_millis(self.session_idle_timeout_ms)
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

/// 读取必须大于 0 的数值配置。
fn read_positive_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    match read_u64_with_default(key, default)? {
        0 => Err(ConfigError::Invalid(key.to_string(), "0".to_string())),
        value => Ok(value),
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// 解析 `"a,b"` 形式的坐标对（顺序原样保留）。
pub fn parse_location(key: &str, value: &str) -> Result<LatLng, ConfigError> {
    let invalid = || ConfigError::Invalid(key.to_string(), value.to_string());
    let (first, second) = value.split_once(',').ok_or_else(invalid)?;
    let first = first.trim().parse::<f64>().map_err(|_| invalid())?;
    let second = second.trim().parse::<f64>().map_err(|_| invalid())?;
    if !first.is_finite() || !second.is_finite() {
        return Err(invalid());
    }
    Ok(LatLng(first, second))
}
