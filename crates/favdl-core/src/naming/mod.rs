//! Local filename derivation.
//!
//! Builds `{author}-{title}.{ext}` from the item metadata and the download URL,
//! sanitizes it, and disambiguates it against what is already on disk.

mod path;
mod sanitize;
mod unique;

pub use path::{extension_from_url, filename_from_url_path};
pub use sanitize::sanitize_filename;
pub use unique::unique_filename;

/// Stem used when neither metadata nor the URL yield anything usable.
const DEFAULT_STEM: &str = "download";

/// Stem length cap in bytes; leaves room for `-NNNN`, the extension and `.part`
/// within Linux NAME_MAX (255).
const MAX_STEM_BYTES: usize = 200;

/// Longest extension taken from a URL. Anything longer, or not plain
/// alphanumeric, is dropped.
const MAX_EXT_BYTES: usize = 10;

/// Derives a sanitized filename for a download.
///
/// The stem is `{author}-{title}` when both are known, whichever one is known
/// otherwise, and the URL's last path segment (minus extension) as a last resort.
/// The extension comes from the URL.
///
/// # Examples
///
/// - `derive_filename(Some("Artist"), Some("My Pic"), "https://d.example/a/1.pic.png")` → `"artist-my_pic.png"`
/// - `derive_filename(None, None, "https://d.example/a/1.pic.png")` → `"1.pic.png"`
pub fn derive_filename(author: Option<&str>, title: Option<&str>, url: &str) -> String {
    let author = author.map(str::trim).filter(|s| !s.is_empty());
    let title = title.map(str::trim).filter(|s| !s.is_empty());
    let ext = extension_from_url(url)
        .map(|e| sanitize_filename(&e))
        .filter(|e| is_usable_extension(e));

    let raw_stem = match (author, title) {
        (Some(a), Some(t)) => format!("{}-{}", a, t),
        (Some(one), None) | (None, Some(one)) => one.to_string(),
        (None, None) => filename_from_url_path(url)
            .map(|name| match name.rsplit_once('.') {
                Some((stem, _)) if !stem.is_empty() => stem.to_string(),
                _ => name,
            })
            .unwrap_or_default(),
    };

    let mut stem = sanitize_filename(&raw_stem);
    if stem.len() > MAX_STEM_BYTES {
        // Sanitized names are ASCII, so any byte index is a char boundary.
        stem.truncate(MAX_STEM_BYTES);
        stem = sanitize_filename(&stem);
    }
    if !stem.chars().any(|c| c.is_ascii_alphanumeric()) {
        stem = DEFAULT_STEM.to_string();
    }

    match ext {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

fn is_usable_extension(ext: &str) -> bool {
    !ext.is_empty() && ext.len() <= MAX_EXT_BYTES && ext.bytes().all(|b| b.is_ascii_alphanumeric())
}
