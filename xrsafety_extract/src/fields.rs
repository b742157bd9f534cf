//! Field scanning for `key = value` assignments in ALN shards.
//!
//! The summary command needs the numeric factors and stage/mode tokens out
//! of a shard without a grammar. Assignments are recognized line by line;
//! a missing key yields `None` and the caller picks its own default.

use once_cell::sync::Lazy;
use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "the assignment pattern is a static literal"
)]
fn build_assignment_re() -> Regex {
    Regex::new(r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*[:=]\s*([^\r\n]+?)\s*$")
        .expect("assignment regex should compile")
}

static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(build_assignment_re);

/// Find the value of the first `key = value` (or `key: value`) line.
///
/// Surrounding quotes and a trailing `,` or `;` are stripped; the rest of
/// the line is returned as-is.
#[must_use]
pub fn scan_str(text: &str, key: &str) -> Option<String> {
    ASSIGNMENT_RE
        .captures_iter(text)
        .find(|caps| &caps[1] == key)
        .map(|caps| clean_value(&caps[2]))
}

/// Find the value of the first `key = value` line and parse it as f32.
///
/// A present but non-numeric value is treated the same as a missing key.
#[must_use]
pub fn scan_f32(text: &str, key: &str) -> Option<f32> {
    scan_str(text, key).and_then(|v| v.parse().ok())
}

fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches([',', ';']).trim();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
