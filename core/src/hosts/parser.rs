//! Text to line records.
//!
//! Parsing cannot fail: a line that is not `<ip> <domain...>` becomes an
//! [`LineKind::Unparsed`](super::LineKind::Unparsed) record and is carried through untouched.

use hostsctl_common::network::ip::IpPredicate;

use super::line::{COMMENT_MARKER, HostLine};
use super::LineEnding;

/// Splits `text` into lines, one per terminator-separated segment.
///
/// A trailing terminator yields a final empty segment, so the count of
/// returned lines is always the number of terminators plus one.
pub(crate) fn split_lines(text: &str, ending: LineEnding) -> impl Iterator<Item = &str> {
    text.split('\n').map(move |line| match ending {
        LineEnding::CrLf => line.strip_suffix('\r').unwrap_or(line),
        LineEnding::Lf => line,
    })
}

/// Classifies a single line.
pub(crate) fn parse_line(raw: &str, is_valid_ip: IpPredicate) -> HostLine {
    let line = raw.trim();

    if line.is_empty() {
        return HostLine::blank(raw);
    }

    if let Some(comment) = line.strip_prefix(COMMENT_MARKER) {
        return HostLine::unparsed(raw, comment.trim());
    }

    let (body, comment) = match line.split_once(COMMENT_MARKER) {
        Some((body, comment)) => (body.trim(), comment.trim()),
        None => (line, ""),
    };

    let mut fields = body.split_whitespace();
    let (Some(ip), Some(first_domain)) = (fields.next(), fields.next()) else {
        return HostLine::unparsed(raw, comment);
    };

    if !is_valid_ip(ip) {
        return HostLine::unparsed(raw, comment);
    }

    let domains: Vec<String> = std::iter::once(first_domain)
        .chain(fields)
        .map(str::to_string)
        .collect();

    HostLine::entry(raw, ip, domains, comment)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
