//! # Hosts File Model
//!
//! [`HostsFile`] owns the lines of one hosts file in their original order.
//! The line sequence is the only source of truth; the two lookup indices
//! (address to line, domain to line) hold positions into it and are rebuilt
//! after every structural edit.
//!
//! ```text
//! parse(text) ─▶ HostsFile ─▶ add_domain / remove_domain / merge_by_ip ─▶ to_hosts_string()
//! ```

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use hostsctl_common::network::ip::{IpPredicate, is_ip_address};
use serde::Serialize;

mod edit;
mod line;
mod parser;

pub use line::{COMMENT_MARKER, Entry, HostLine, LineKind};

/// The terminator written between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Picks the style of the first terminator in `text`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostsFile {
    lines: Vec<HostLine>,
    by_ip: BTreeMap<String, usize>,
    by_domain: BTreeMap<String, usize>,
    #[serde(skip)]
    line_ending: LineEnding,
    #[serde(skip)]
    is_valid_ip: IpPredicate,
}

impl Default for HostsFile {
    fn default() -> Self {
        Self::with_predicate(is_ip_address)
    }
}

impl HostsFile {
    fn with_predicate(is_valid_ip: IpPredicate) -> Self {
        Self {
            lines: Vec::new(),
            by_ip: BTreeMap::new(),
            by_domain: BTreeMap::new(),
            line_ending: LineEnding::default(),
            is_valid_ip,
        }
    }

    /// Parses hosts file text, validating addresses with [`is_ip_address`].
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, is_ip_address)
    }

    /// Parses hosts file text with a caller-supplied address check.
    ///
    /// Every line of `text` becomes exactly one record. The same check is used
    /// later by [`add_domain`](Self::add_domain).
    pub fn parse_with(text: &str, is_valid_ip: IpPredicate) -> Self {
        let mut hosts = Self::with_predicate(is_valid_ip);
        hosts.line_ending = LineEnding::detect(text);
        hosts.lines = parser::split_lines(text, hosts.line_ending)
            .map(|raw| parser::parse_line(raw, is_valid_ip))
            .collect();
        hosts.rebuild_index();
        hosts
    }

    pub fn lines(&self) -> &[HostLine] {
        &self.lines
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Number of lines, including blanks and comments.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over entry lines in file order.
    pub fn entries(&self) -> impl Iterator<Item = &HostLine> {
        self.lines.iter().filter(|line| line.is_entry())
    }

    /// The indexed line for `ip`. When several lines share the address, the last one wins.
    pub fn entry_for_ip(&self, ip: &str) -> Option<&HostLine> {
        self.by_ip.get(ip).map(|&pos| &self.lines[pos])
    }

    /// The indexed line holding `domain`. When several lines hold it, the last one wins.
    pub fn entry_for_domain(&self, domain: &str) -> Option<&HostLine> {
        self.by_domain.get(domain.trim()).map(|&pos| &self.lines[pos])
    }

    /// Rebuilds both indices from the line sequence.
    fn rebuild_index(&mut self) {
        self.by_ip.clear();
        self.by_domain.clear();

        for (pos, line) in self.lines.iter().enumerate() {
            let Some(entry) = line.as_entry() else {
                continue;
            };
            self.by_ip.insert(entry.ip.clone(), pos);
            for domain in &entry.domains {
                self.by_domain.insert(domain.trim().to_string(), pos);
            }
        }
    }

    /// Reconstructs the file content.
    ///
    /// Lines are joined with the detected terminator; the last line gets none.
    pub fn to_hosts_string(&self) -> String {
        self.to_string()
    }

    /// JSON view of the lines and both indices.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl FromStr for HostsFile {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for HostsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str(self.line_ending.as_str())?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
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
