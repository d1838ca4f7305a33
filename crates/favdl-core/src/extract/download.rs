//! Item detail page: the download anchor.

use regex::Regex;
use std::sync::LazyLock;

use super::decode_entities;

static DOWNLOAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div class="download">\s*<a\s+href="([^"]*)"[^>]*>.*?</div>"#)
        .expect("download pattern is valid")
});

/// Direct download URL from an item page.
///
/// Only protocol-relative hrefs (`//host/path`) are accepted and are rewritten to
/// `https://host/path`. A missing container or any other href shape is `None`.
pub fn extract_download_url(page: &str) -> Option<String> {
    let caps = DOWNLOAD_RE.captures(page)?;
    let href = decode_entities(caps[1].trim());
    match href.strip_prefix("//") {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Some(format!("https://{}", rest)),
        _ => None,
    }
}
