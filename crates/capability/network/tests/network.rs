use nms_network::{is_valid_ip_address, is_valid_port, parse_port};

#[test]
fn accepts_ipv4_and_ipv6() {
    assert!(is_valid_ip_address("10.0.0.1"));
    assert!(is_valid_ip_address("255.255.255.255"));
    assert!(is_valid_ip_address("::1"));
    assert!(is_valid_ip_address("fe80::1ff:fe23:4567:890a"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_ip_address("999.999.999.999"));
    assert!(!is_valid_ip_address("10.0.0"));
    assert!(!is_valid_ip_address("router.local"));
    assert!(!is_valid_ip_address("10.0.0.1:8080"));
    assert!(!is_valid_ip_address("10.0.0.0/24"));
    assert!(!is_valid_ip_address(""));
    assert!(!is_valid_ip_address(" 192.168.1.100 "));
}

#[test]
fn port_range_is_inclusive() {
    assert!(is_valid_port("1"));
    assert!(is_valid_port("8080"));
    assert!(is_valid_port("65535"));
    assert!(!is_valid_port("0"));
    assert!(!is_valid_port("65536"));
    assert!(!is_valid_port("99999999999"));
}

#[test]
fn port_must_be_plain_integer() {
    assert!(!is_valid_port("-1"));
    assert!(!is_valid_port("+80"));
    assert!(!is_valid_port("80.5"));
    assert!(!is_valid_port("http"));
    assert!(!is_valid_port(""));
    assert_eq!(parse_port("502"), Some(502));
    assert_eq!(parse_port(" 502 "), None);
    assert!(!is_valid_port(" 8080"));
}
