//! Collision-free names inside the downloads directory.

use std::collections::HashSet;
use std::path::Path;

/// Returns `name` if neither `dir/name` exists nor `taken` contains it; otherwise
/// inserts `-0001`, `-0002`, ... before the extension until both checks pass.
pub fn unique_filename(dir: &Path, name: &str, taken: &HashSet<String>) -> String {
    let free = |candidate: &str| !taken.contains(candidate) && !dir.join(candidate).exists();
    if free(name) {
        return name.to_string();
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };
    let mut postfix = 1u32;
    loop {
        let candidate = match ext {
            Some(ext) => format!("{}-{:04}.{}", stem, postfix, ext),
            None => format!("{}-{:04}", stem, postfix),
        };
        if free(&candidate) {
            return candidate;
        }
        postfix += 1;
    }
}
