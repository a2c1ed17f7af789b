//! One physical line of a hosts file.

use std::fmt;

use serde::{Serialize, Serializer};

pub const COMMENT_MARKER: char = '#';

/// What a line turned out to be when it was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// A comment line, or anything that is not `<ip> <domain...>`.
    Unparsed,
    /// A valid address followed by at least one domain.
    Entry(Entry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub ip: String,
    /// In order of appearance. Duplicates are kept.
    pub domains: Vec<String>,
}

impl Entry {
    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d.trim() == domain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLine {
    /// The line exactly as read, without its terminator.
    pub raw: String,
    pub kind: LineKind,
    /// Comment text without the marker, trimmed. Empty means none.
    pub comment: String,
}

impl HostLine {
    pub fn blank(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            kind: LineKind::Blank,
            comment: String::new(),
        }
    }

    pub fn unparsed(raw: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            kind: LineKind::Unparsed,
            comment: comment.into(),
        }
    }

    pub fn entry(
        raw: impl Into<String>,
        ip: impl Into<String>,
        domains: Vec<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            raw: raw.into(),
            kind: LineKind::Entry(Entry {
                ip: ip.into(),
                domains,
            }),
            comment: comment.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    pub fn is_entry(&self) -> bool {
        matches!(self.kind, LineKind::Entry(_))
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match &self.kind {
            LineKind::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_entry_mut(&mut self) -> Option<&mut Entry> {
        match &mut self.kind {
            LineKind::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn ip(&self) -> Option<&str> {
        self.as_entry().map(|entry| entry.ip.as_str())
    }

    /// Domains of an entry line; empty for every other line.
    pub fn domains(&self) -> &[String] {
        match self.as_entry() {
            Some(entry) => &entry.domains,
            None => &[],
        }
    }

    /// Overwrites the comment when `comment` is given and differs.
    ///
    /// Returns whether the comment changed.
    pub(crate) fn set_comment(&mut self, comment: Option<&str>) -> bool {
        match comment {
            Some(comment) if comment != self.comment => {
                self.comment = comment.to_string();
                true
            }
            _ => false,
        }
    }

    /// Folds a later line for the same address into this one.
    pub(crate) fn absorb(&mut self, other: HostLine) {
        let HostLine { kind, comment, .. } = other;

        if let (Some(entry), LineKind::Entry(other)) = (self.as_entry_mut(), kind) {
            entry.domains.extend(other.domains);
        }
        if self.comment.is_empty() && !comment.is_empty() {
            self.comment = comment;
        }
    }
}

impl fmt::Display for HostLine {
    /// Renders the line as it is written back to disk, without a terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comment = self.comment.trim();

        match &self.kind {
            LineKind::Blank => Ok(()),
            LineKind::Unparsed if !comment.is_empty() => write!(f, "{COMMENT_MARKER} {comment}"),
            LineKind::Unparsed => f.write_str(&self.raw),
            LineKind::Entry(entry) => {
                f.write_str(&entry.ip)?;
                if !entry.domains.is_empty() {
                    write!(f, " {}", entry.domains.join(" "))?;
                }
                if !comment.is_empty() {
                    write!(f, " {COMMENT_MARKER} {comment}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineView<'a> {
    raw: &'a str,
    is_entry: bool,
    ip: &'a str,
    domains: &'a [String],
    comment: &'a str,
    is_blank: bool,
}

impl Serialize for HostLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LineView {
            raw: &self.raw,
            is_entry: self.is_entry(),
            ip: self.ip().unwrap_or_default(),
            domains: self.domains(),
            comment: &self.comment,
            is_blank: self.is_blank(),
        }
        .serialize(serializer)
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
