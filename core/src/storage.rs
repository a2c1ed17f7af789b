//! Reading and writing the hosts file.
//!
//! A plain read and a plain overwrite. No locking, no temporary file and rename:
//! a concurrent edit made between [`load`] and [`save`] is lost.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{HostsError, Result};
use crate::hosts::HostsFile;

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| HostsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the file at `path`.
pub fn load(path: &Path) -> Result<HostsFile> {
    let content = read_to_string(path)?;
    let hosts = HostsFile::parse(&content);
    debug!(path = %path.display(), lines = hosts.len(), "loaded hosts file");
    Ok(hosts)
}

/// Overwrites `path` with the serialized `hosts`.
pub fn save(path: &Path, hosts: &HostsFile) -> Result<()> {
    let content = hosts.to_hosts_string();
    fs::write(path, content.as_bytes()).map_err(|source| HostsError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote hosts file");
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
