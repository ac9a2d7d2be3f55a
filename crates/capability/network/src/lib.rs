//! 网络地址与端口校验。
//!
//! - is_valid_ip_address：IPv4 / IPv6 地址格式
//! - is_valid_port：1-65535 的整数端口

use std::net::IpAddr;

/// 端口允许的最小值（0 为保留端口）。
pub const MIN_PORT: u32 = 1;
/// 端口允许的最大值。
pub const MAX_PORT: u32 = 65_535;

/// 验证 IP 地址格式（IPv4 与 IPv6 均可）。
///
/// 校验的文本即提交的文本：首尾带空格视为非法；不接受主机名、CIDR 或带端口的地址。
pub fn is_valid_ip_address(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// 验证端口：十进制整数，范围 1-65535。
pub fn is_valid_port(value: &str) -> bool {
    parse_port(value).is_some()
}

/// 解析端口文本，非法时返回 None（含首尾空格）。
pub fn parse_port(value: &str) -> Option<u16> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let port = value.parse::<u32>().ok()?;
    if (MIN_PORT..=MAX_PORT).contains(&port) {
        u16::try_from(port).ok()
    } else {
        None
    }
}
