//! Line-level marker recognition.

use regex::Regex;
use std::sync::LazyLock;

use super::types::AreaHeader;

/// The literal substring identifying an END marker.
const END_TOKEN: &str = "END WORKFLOW AREA";

/// The literal body of an ELSE marker once comment decoration is removed.
const ELSE_TOKEN: &str = "ELSE";

/// Comment openers that may precede `ELSE`. Longer tokens come first so that
/// `{/*` wins over `/*` and `<!--` over `--`.
const COMMENT_OPENERS: &[&str] = &["<!--", "{/*", "//", "/*", "--", "#", ";", "*"];

/// Comment closers that may follow `ELSE`.
const COMMENT_CLOSERS: &[&str] = &["*/}", "-->", "*/"];

static AREA_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<prefix>.*?)BEGIN (?:(?P<once>ONCE) )?(?:(?P<sorted>SORTED) )?WORKFLOW AREA (?P<name>\S+) FOR (?P<ids>\S+(?: +\S+)*?)(?: +IF +(?P<flag>\S+))?\s*$",
    )
    .expect("area start pattern is valid")
});

/// Parse a BEGIN marker line.
///
/// Returns `None` unless the line has exactly the marker shape; token order is
/// fixed, so `BEGIN SORTED ONCE ...` does not match.
///
/// # Example
///
/// ```
/// use areasync::marker::parse_area_start;
///
/// let header = parse_area_start("// BEGIN SORTED WORKFLOW AREA deps FOR web api IF upload").unwrap();
/// assert_eq!(header.prefix, "// ");
/// assert_eq!(header.name, "deps");
/// assert_eq!(header.workflows, vec!["web", "api"]);
/// assert!(header.sorted && !header.once);
/// assert_eq!(header.flag.as_deref(), Some("upload"));
/// ```
pub fn parse_area_start(line: &str) -> Option<AreaHeader> {
    let caps = AREA_START.captures(line)?;

    let workflows: Vec<String> = caps["ids"].split_whitespace().map(String::from).collect();
    if workflows.is_empty() {
        return None;
    }

    Some(AreaHeader {
        prefix: caps["prefix"].to_string(),
        name: caps["name"].to_string(),
        workflows,
        once: caps.name("once").is_some(),
        sorted: caps.name("sorted").is_some(),
        flag: caps.name("flag").map(|m| m.as_str().to_string()),
        start_text: line.to_string(),
    })
}

/// True if the line contains `END WORKFLOW AREA` anywhere.
pub fn is_area_end(line: &str) -> bool {
    line.contains(END_TOKEN)
}

/// True if the line is an ELSE marker, optionally wrapped in a comment token.
pub fn is_else_marker(line: &str) -> bool {
    let mut rest = line.trim();

    if let Some(opener) = COMMENT_OPENERS.iter().find(|t| rest.starts_with(**t)) {
        rest = rest[opener.len()..].trim_start();
    }
    if let Some(closer) = COMMENT_CLOSERS.iter().find(|t| rest.ends_with(**t)) {
        rest = rest[..rest.len() - closer.len()].trim_end();
    }

    rest == ELSE_TOKEN
}

/// True if the line is a BEGIN or END marker.
///
/// ELSE markers are not included; they only have meaning inside an area.
pub fn is_marker_line(line: &str) -> bool {
    is_area_end(line) || parse_area_start(line).is_some()
}
