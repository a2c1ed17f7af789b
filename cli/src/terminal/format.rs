use crate::terminal::colors;
use colored::*;
use hostsctl_common::network::ip::{ip_version, parse_ip};
use std::net::{IpAddr, Ipv6Addr};

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if ipv6_addr.is_loopback() {
        return "Loopback";
    }
    if ipv6_addr.to_ipv4_mapped().is_some() {
        return "Mapped";
    }
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// 2000::/3
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

/// Short label for the address family, e.g. `IPv4` or `ULA`.
pub fn ip_type_str(ip: &str) -> &'static str {
    match parse_ip(ip) {
        Ok(IpAddr::V4(ipv4_addr)) if ipv4_addr.is_loopback() => "Loopback",
        Ok(IpAddr::V4(_)) => "IPv4",
        Ok(IpAddr::V6(ipv6_addr)) => ipv6_to_type_str(&ipv6_addr),
        Err(_) => "Unknown",
    }
}

pub fn colored_ip(ip: &str) -> ColoredString {
    match parse_ip(ip) {
        Ok(IpAddr::V4(_)) => ip.color(colors::IPV4_ADDR),
        Ok(IpAddr::V6(_)) => ip.color(colors::IPV6_ADDR),
        Err(_) => ip.normal(),
    }
}

/// Tree head for one address: `10.0.0.1 (v4, IPv4)`.
pub fn ip_heading(ip: &str) -> String {
    let kind: ColoredString =
        format!("({}, {})", ip_version(ip), ip_type_str(ip)).color(colors::SEPARATOR);
    format!("{} {}", colored_ip(ip).bold(), kind)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_type_str() {
        assert_eq!(ip_type_str("127.0.0.1"), "Loopback");
        assert_eq!(ip_type_str("192.168.1.10"), "IPv4");
        assert_eq!(ip_type_str("::1"), "Loopback");
        assert_eq!(ip_type_str("::ffff:10.0.0.1"), "Mapped");
        assert_eq!(ip_type_str("2001:db8::1"), "GUA");
        assert_eq!(ip_type_str("fd00::1"), "ULA");
        assert_eq!(ip_type_str("fe80::1"), "LLA");
        assert_eq!(ip_type_str("ff02::1"), "IPv6");
        assert_eq!(ip_type_str("nope"), "Unknown");
    }

    #[test]
    fn test_ip_heading_contains_address_and_type() {
        colored::control::set_override(false);
        assert_eq!(ip_heading("10.0.0.1"), "10.0.0.1 (v4, IPv4)");
        assert_eq!(ip_heading("::1"), "::1 (v6, Loopback)");
        assert_eq!(ip_heading("::ffff:10.0.0.1"), "::ffff:10.0.0.1 (v4, Mapped)");
    }
}
