//! Filesystem-safe filename sanitization.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_.-]").expect("valid"));
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").expect("valid"));

/// Sanitizes a candidate filename.
///
/// - Replaces whitespace runs with `_`
/// - Drops everything outside `[a-zA-Z0-9_.-]`
/// - Collapses consecutive underscores
/// - Turns `_-_` (a spaced dash) into `-`
/// - Trims leading/trailing dots and underscores
/// - Lowercases
///
/// The result is stable: sanitizing it again returns it unchanged.
pub fn sanitize_filename(name: &str) -> String {
    let s = WHITESPACE.replace_all(name, "_");
    let s = DISALLOWED.replace_all(&s, "");
    let s = UNDERSCORES.replace_all(&s, "_");
    let s = s.replace("_-_", "-");
    s.trim_matches(|c| c == '.' || c == '_').to_ascii_lowercase()
}
