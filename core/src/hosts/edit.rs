//! Mutations on [`HostsFile`].
//!
//! Every edit builds a new line sequence instead of deleting while iterating,
//! then rebuilds the indices if anything changed.

use std::collections::HashMap;

use tracing::debug;

use super::{HostLine, HostsFile};
use crate::error::{HostsError, Result};

impl HostsFile {
    /// Points `domain` at `ip`.
    ///
    /// * Same address already holds the domain: only the comment may change.
    /// * Another address holds it: the domain is removed there first, which
    ///   deletes that line if it ends up with no domains.
    /// * A line for `ip` exists: the domain is appended to it.
    /// * Otherwise a new line is appended at the end of the file.
    ///
    /// A blank comment counts as no comment. Returns whether anything changed.
    pub fn add_domain(&mut self, ip: &str, domain: &str, comment: Option<&str>) -> Result<bool> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(HostsError::EmptyDomain);
        }
        if !(self.is_valid_ip)(ip) {
            return Err(HostsError::InvalidIp(ip.to_string()));
        }
        let comment = comment.map(str::trim).filter(|c| !c.is_empty());

        if let Some(pos) = self.position_of_domain(domain) {
            let current = &mut self.lines[pos];
            if current.ip() == Some(ip) {
                let changed = current.set_comment(comment);
                debug!(domain, ip, changed, "domain already mapped to this address");
                return Ok(changed);
            }

            debug!(domain, from = current.ip(), to = ip, "moving domain to another address");
            self.remove_domain(domain);
        }

        match self.lines.iter().position(|line| line.ip() == Some(ip)) {
            Some(pos) => {
                let line = &mut self.lines[pos];
                if let Some(entry) = line.as_entry_mut() {
                    entry.domains.push(domain.to_string());
                }
                line.set_comment(comment);
                debug!(domain, ip, line = pos, "appended domain to existing address");
            }
            None => {
                self.lines.push(HostLine::entry(
                    format!("{ip} {domain}"),
                    ip,
                    vec![domain.to_string()],
                    comment.unwrap_or_default(),
                ));
                debug!(domain, ip, "added new address line");
            }
        }

        self.rebuild_index();
        Ok(true)
    }

    /// Removes every occurrence of `domain`, deleting lines left without domains.
    ///
    /// All lines are scanned, not only the indexed one, so duplicates left by a
    /// hand-edited file are cleaned up as well. Returns whether anything changed.
    pub fn remove_domain(&mut self, domain: &str) -> bool {
        let domain = domain.trim();
        let mut removed = 0usize;

        let lines = std::mem::take(&mut self.lines);
        self.lines = lines
            .into_iter()
            .filter_map(|mut line| {
                if let Some(entry) = line.as_entry_mut() {
                    let before = entry.domains.len();
                    entry.domains.retain(|d| d.trim() != domain);
                    removed += before - entry.domains.len();

                    if entry.domains.is_empty() && !entry.ip.is_empty() {
                        debug!(ip = %entry.ip, "dropping line without domains");
                        return None;
                    }
                }
                Some(line)
            })
            .collect();

        if removed > 0 {
            debug!(domain, removed, "removed domain");
            self.rebuild_index();
        }
        removed > 0
    }

    /// Collapses lines sharing an address into the first of them.
    ///
    /// Later lines give up their domains (in order, duplicates kept) and, if the
    /// first line has no comment, their comment. Returns whether anything changed.
    pub fn merge_by_ip(&mut self) -> bool {
        let mut merged: Vec<HostLine> = Vec::with_capacity(self.lines.len());
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut changed = false;

        for line in std::mem::take(&mut self.lines) {
            let ip = match line.ip() {
                Some(ip) if !ip.is_empty() => ip.to_string(),
                _ => {
                    merged.push(line);
                    continue;
                }
            };

            match first_seen.get(&ip) {
                Some(&pos) => {
                    debug!(ip = %ip, into = pos, "merging duplicate address line");
                    merged[pos].absorb(line);
                    changed = true;
                }
                None => {
                    first_seen.insert(ip, merged.len());
                    merged.push(line);
                }
            }
        }

        self.lines = merged;
        if changed {
            self.rebuild_index();
        }
        changed
    }

    /// Position of the first entry line holding `domain`.
    fn position_of_domain(&self, domain: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.as_entry().is_some_and(|entry| entry.has_domain(domain)))
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
