#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A typical Linux hosts file with the usual oddities.
pub const SYSTEM_HOSTS: &str = "\
# /etc/hosts: static lookup table for host names
#

127.0.0.1\tlocalhost
127.0.1.1\tworkstation.lan\tworkstation

# The following lines are desirable for IPv6 capable hosts
::1     localhost ip6-localhost ip6-loopback
fe00::0 ip6-localnet
ff02::1 ip6-allnodes
fe80::1%lo0\tlocalhost
   indented-garbage without address
192.168.1.20 nas.lan # storage box
";

/// Writes `content` to a fresh `hosts` file inside a temporary directory.
///
/// The directory lives as long as the returned guard.
pub fn hosts_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("hosts");
    fs::write(&path, content).expect("failed to write fixture");
    (dir, path)
}
