//! # IP Address Helpers
//!
//! Syntactic checks only: nothing here touches the network.
//!
//! The parser and the add operation use [`is_ip_address`] to decide whether the
//! first field of a line is an address. Zone suffixes (`fe80::1%lo0`) and IPv4
//! octets with leading zeros are rejected, so such lines stay unparsed and are
//! written back untouched.

use std::fmt;
use std::net::IpAddr;

use thiserror::Error;

/// Signature of the validity check the hosts model is built with.
pub type IpPredicate = fn(&str) -> bool;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid IP address: {0}")]
pub struct InvalidIpError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
    Unknown,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IpVersion::V4 => "v4",
            IpVersion::V6 => "v6",
            IpVersion::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Parses an IPv4 or IPv6 address.
pub fn parse_ip(s: &str) -> Result<IpAddr, InvalidIpError> {
    s.parse::<IpAddr>()
        .map_err(|_| InvalidIpError(s.to_string()))
}

/// Returns true if `s` is a valid IPv4 or IPv6 address.
pub fn is_ip_address(s: &str) -> bool {
    parse_ip(s).is_ok()
}

/// Classifies `s` by address family.
///
/// IPv4-mapped IPv6 addresses (`::ffff:10.0.0.1`) count as IPv4.
pub fn ip_version(s: &str) -> IpVersion {
    match parse_ip(s) {
        Ok(IpAddr::V4(_)) => IpVersion::V4,
        Ok(IpAddr::V6(v6)) if v6.to_ipv4_mapped().is_some() => IpVersion::V4,
        Ok(IpAddr::V6(_)) => IpVersion::V6,
        Err(_) => IpVersion::Unknown,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
