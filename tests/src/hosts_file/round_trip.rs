#![cfg(test)]
use hostsctl_core::{HostLine, HostsFile};

use super::fixtures::SYSTEM_HOSTS;

fn semantic(line: &HostLine) -> (bool, bool, Option<&str>, &[String], &str) {
    (line.is_blank(), line.is_entry(), line.ip(), line.domains(), line.comment.as_str())
}

#[test]
fn serialize_then_parse_keeps_every_line_meaning() {
    let hosts = HostsFile::parse(SYSTEM_HOSTS);
    let reparsed = HostsFile::parse(&hosts.to_hosts_string());

    assert_eq!(hosts.len(), reparsed.len());
    for (before, after) in hosts.lines().iter().zip(reparsed.lines()) {
        assert_eq!(semantic(before), semantic(after), "line {:?} changed meaning", before.raw);
    }
}

#[test]
fn unparsed_lines_are_written_verbatim() {
    let output = HostsFile::parse(SYSTEM_HOSTS).to_hosts_string();

    assert!(output.contains("\n   indented-garbage without address\n"));
    assert!(output.contains("\nfe80::1%lo0\tlocalhost\n"));
    assert!(output.contains("\n#\n"));
    assert!(output.ends_with("192.168.1.20 nas.lan # storage box\n"));
}

#[test]
fn entry_whitespace_is_normalized() {
    let output = HostsFile::parse(SYSTEM_HOSTS).to_hosts_string();

    assert!(output.contains("\n127.0.1.1 workstation.lan workstation\n"));
    assert!(output.contains("\n::1 localhost ip6-localhost ip6-loopback\n"));
}

#[test]
fn normalized_file_round_trips_exactly() {
    let normalized = HostsFile::parse(SYSTEM_HOSTS).to_hosts_string();
    assert_eq!(HostsFile::parse(&normalized).to_hosts_string(), normalized);
}

#[test]
fn garbage_never_fails_to_parse() {
    let garbage = "\u{0}\u{1}###\n\t\t\n== not hosts ==\n1.2.3.4\n999.1.1.1 x\n#";
    let hosts = HostsFile::parse(garbage);

    assert_eq!(hosts.len(), 6);
    assert_eq!(hosts.entries().count(), 0);
    assert_eq!(hosts.to_hosts_string().lines().count(), garbage.lines().count());
}

#[test]
fn every_entry_address_is_valid() {
    use hostsctl_common::network::ip::{IpVersion, ip_version, is_ip_address};

    let hosts = HostsFile::parse_with(SYSTEM_HOSTS, is_ip_address);
    let versions: Vec<IpVersion> = hosts.entries().filter_map(HostLine::ip).map(ip_version).collect();

    assert_eq!(
        versions,
        [IpVersion::V4, IpVersion::V4, IpVersion::V6, IpVersion::V6, IpVersion::V6, IpVersion::V4]
    );
}
