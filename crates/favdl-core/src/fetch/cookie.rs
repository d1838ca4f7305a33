//! Session credential file.

use std::path::Path;

/// Read the session cookie from `path`. No validation is performed; trailing
/// newlines are stripped. A missing or unreadable file is logged and yields an
/// empty credential so public pages still work.
pub fn read_cookie(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s.trim_end_matches(['\r', '\n']).to_string(),
        Err(e) => {
            tracing::error!("{} not readable ({}); continuing without a session cookie", path.display(), e);
            String::new()
        }
    }
}
