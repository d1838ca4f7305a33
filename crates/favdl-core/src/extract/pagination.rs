//! Listing pagination control.

use regex::Regex;

/// Path of the next listing page for `username`, e.g.
/// `/favorites/somefauser/1376978330/next`. `None` on the last page.
///
/// The pattern is scoped to the username so links to other users' listings on
/// the same page are never followed.
pub fn extract_next_page(page: &str, username: &str) -> Option<String> {
    if username.is_empty() {
        return None;
    }
    let pattern = format!(r"(?i)/favorites/{}/[0-9]+/next", regex::escape(username));
    let re = Regex::new(&pattern).ok()?;
    re.find(page).map(|m| m.as_str().to_string())
}
