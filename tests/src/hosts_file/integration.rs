#![cfg(test)]
use std::fs;

use hostsctl_core::{HostLine, HostsError, storage};

use super::fixtures::{SYSTEM_HOSTS, hosts_file};

#[test]
fn add_remove_merge_through_disk() -> anyhow::Result<()> {
    let (_dir, path) = hosts_file("127.0.0.1 a.local # dev\n");

    // Point another name at the same address.
    let mut hosts = storage::load(&path)?;
    assert!(hosts.add_domain("127.0.0.1", "b.local", None)?);
    storage::save(&path, &hosts)?;
    assert_eq!(fs::read_to_string(&path)?, "127.0.0.1 a.local b.local # dev\n");

    // Move a.local elsewhere.
    let mut hosts = storage::load(&path)?;
    assert!(hosts.add_domain("10.0.0.1", "a.local", None)?);
    storage::save(&path, &hosts)?;
    assert_eq!(fs::read_to_string(&path)?, "127.0.0.1 b.local # dev\n\n10.0.0.1 a.local");

    // Removing the last name of 127.0.0.1 drops the whole line.
    let mut hosts = storage::load(&path)?;
    assert!(hosts.remove_domain("b.local"));
    storage::save(&path, &hosts)?;
    assert_eq!(fs::read_to_string(&path)?, "\n10.0.0.1 a.local");

    let hosts = storage::load(&path)?;
    assert_eq!(hosts.entries().count(), 1);
    assert_eq!(hosts.entry_for_domain("a.local").and_then(HostLine::ip), Some("10.0.0.1"));
    Ok(())
}

#[test]
fn add_new_ip_to_newline_terminated_file_inserts_blank_line() -> anyhow::Result<()> {
    let (_dir, path) = hosts_file("127.0.0.1 localhost\n");

    let mut hosts = storage::load(&path)?;
    assert!(hosts.add_domain("10.0.0.1", "a.local", None)?);
    storage::save(&path, &hosts)?;

    // The final newline becomes a blank line and the file ends without one.
    assert_eq!(fs::read_to_string(&path)?, "127.0.0.1 localhost\n\n10.0.0.1 a.local");
    Ok(())
}

#[test]
fn merge_duplicate_lines_from_disk() -> anyhow::Result<()> {
    let (_dir, path) = hosts_file("1.1.1.1 x\n1.1.1.1 y\n");

    let mut hosts = storage::load(&path)?;
    assert!(hosts.merge_by_ip());
    storage::save(&path, &hosts)?;
    assert_eq!(fs::read_to_string(&path)?, "1.1.1.1 x y\n");

    let mut hosts = storage::load(&path)?;
    assert!(!hosts.merge_by_ip());
    Ok(())
}

#[test]
fn editing_one_entry_keeps_the_rest_of_the_file() -> anyhow::Result<()> {
    let (_dir, path) = hosts_file(SYSTEM_HOSTS);

    let mut hosts = storage::load(&path)?;
    assert!(hosts.add_domain("192.168.1.20", "backup.lan", None)?);
    storage::save(&path, &hosts)?;

    let written = fs::read_to_string(&path)?;
    let before: Vec<&str> = SYSTEM_HOSTS.lines().collect();
    let after: Vec<&str> = written.lines().collect();
    assert_eq!(before.len(), after.len());

    // Comments, blanks and unparsed lines come back byte for byte.
    for (old, new) in before.iter().zip(&after) {
        if old.trim().is_empty() || old.trim_start().starts_with('#') || old.contains('%') || old.contains("garbage") {
            assert_eq!(old, new);
        }
    }
    assert_eq!(after.last(), Some(&"192.168.1.20 nas.lan backup.lan # storage box"));
    Ok(())
}

#[test]
fn rejected_input_leaves_model_untouched() -> anyhow::Result<()> {
    let (_dir, path) = hosts_file(SYSTEM_HOSTS);
    let mut hosts = storage::load(&path)?;
    let before = hosts.to_hosts_string();

    let err = hosts.add_domain("bad-ip", "x", None).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "invalid IP address: bad-ip");

    let err = hosts.add_domain("127.0.0.1", "", Some("c")).unwrap_err();
    assert!(matches!(err, HostsError::EmptyDomain));

    assert_eq!(hosts.to_hosts_string(), before);
    Ok(())
}

#[test]
fn domain_is_exclusive_across_addresses() -> anyhow::Result<()> {
    let (_dir, path) = hosts_file(SYSTEM_HOSTS);
    let mut hosts = storage::load(&path)?;

    assert!(hosts.add_domain("10.0.0.5", "localhost", Some("moved"))?);

    let holders: Vec<&str> = hosts
        .entries()
        .filter(|line| line.domains().iter().any(|d| d == "localhost"))
        .filter_map(HostLine::ip)
        .collect();
    assert_eq!(holders, ["10.0.0.5"]);

    // 127.0.0.1 only held localhost, so its line is gone; ::1 kept its aliases.
    assert!(hosts.entry_for_ip("127.0.0.1").is_none());
    assert_eq!(hosts.entry_for_ip("::1").map(HostLine::domains).map(<[String]>::len), Some(2));

    // The zone-id line is not an entry and still mentions localhost.
    assert!(hosts.to_hosts_string().contains("fe80::1%lo0\tlocalhost"));
    Ok(())
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = storage::load(&dir.path().join("absent")).unwrap_err();

    assert!(matches!(err, HostsError::Read { .. }));
    assert!(!err.is_invalid_input());
}
