//! Favorites listing page: one `<figure>` per item.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::decode_entities;

/// Figure block → caption anchor (`/view/<id>/` + title) → first `/user/<name>/` after it.
/// `.` does not cross newlines, so a match never spans two listing entries.
static FAVORITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<figure.+?<p><a\s+href="(/view/[0-9]+/)"\s+title="(.+?)".+?/user/(.+?)/"#)
        .expect("favorite pattern is valid")
});

/// One listing entry as discovered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Favorite {
    pub view_reference: String,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Favorite {
    pub fn new(view_reference: &str, title: &str, author: &str) -> Self {
        Self {
            view_reference: view_reference.to_string(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        }
    }
}

/// All favorites on a listing page. Duplicates collapse; order is not meaningful.
pub fn extract_favorites(page: &str) -> BTreeSet<Favorite> {
    FAVORITE_RE
        .captures_iter(page)
        .map(|c| Favorite {
            view_reference: c[1].to_string(),
            title: Some(decode_entities(&c[2])),
            author: Some(decode_entities(&c[3])),
        })
        .collect()
}
