//! Download file lifecycle.
//!
//! Bytes go to `<name>.part` first; `finalize` syncs and renames to the final
//! name. A part file that is dropped without being finalized (fetch error,
//! write error, panic) is closed and removed, so the downloads directory only
//! ever holds complete files.

mod part;

pub use part::PartFile;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `pic.png` → `pic.png.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
