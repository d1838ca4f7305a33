//! Filename corrector: offline pass that repairs file extensions from magic bytes.
//!
//! Walks the downloads directory, sniffs each file's header, and renames files
//! whose extension disagrees with their content. The store's `local_filename`
//! is rewritten for the row that held the old name.

mod magic;

pub use magic::{detect_extension, read_length, sniff_file, FILE_SIGNATURES};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::storage::TEMP_SUFFIX;
use crate::store::Store;

/// One extension fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub dir: PathBuf,
    pub old_name: String,
    pub new_name: String,
    /// Whether a store row carried the old name.
    pub tracked: bool,
}

/// Planned rename before it is applied.
#[derive(Debug)]
struct Planned {
    dir: PathBuf,
    old_name: String,
    new_name: String,
}

/// Name `file_name` should have for content of type `ext`, or `None` if it
/// already matches.
fn corrected_name(file_name: &str, ext: &str) -> Option<String> {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, current)) => {
            if current == ext {
                return None;
            }
            if stem.is_empty() {
                file_name
            } else {
                stem
            }
        }
        None => file_name,
    };
    Some(format!("{}.{}", stem, ext))
}

/// Recursively collect files needing a new extension. Part files and
/// unrecognized content are skipped.
fn plan(dir: &Path) -> Result<Vec<Planned>> {
    let mut out = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        let entries = std::fs::read_dir(&current)
            .with_context(|| format!("read dir {}", current.display()))?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                stack.push(path);
                continue;
            }
            if !file_type.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::debug!(path = %path.display(), "skipping non-UTF-8 filename");
                continue;
            };
            if name.ends_with(TEMP_SUFFIX) {
                continue;
            }
            let ext = match sniff_file(&path) {
                Ok(Some(ext)) => ext,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "could not read header: {}", e);
                    continue;
                }
            };
            if let Some(new_name) = corrected_name(name, ext) {
                out.push(Planned {
                    dir: current.clone(),
                    old_name: name.to_string(),
                    new_name,
                });
            }
        }
    }
    out.sort_by(|a, b| (&a.dir, &a.old_name).cmp(&(&b.dir, &b.old_name)));
    Ok(out)
}

/// Scan `download_dir` and fix extensions, updating `store`. A missing
/// directory means nothing was downloaded yet and yields no renames.
/// Files whose corrected name is already taken are left alone.
pub async fn correct_extensions(store: &Store, download_dir: &Path) -> Result<Vec<Rename>> {
    if !download_dir.is_dir() {
        tracing::info!("{} does not exist; nothing to correct", download_dir.display());
        return Ok(Vec::new());
    }

    let planned = tokio::task::spawn_blocking({
        let dir = download_dir.to_path_buf();
        move || plan(&dir)
    })
    .await
    .context("scan task join")??;

    let mut renames = Vec::with_capacity(planned.len());
    for p in planned {
        let from = p.dir.join(&p.old_name);
        let to = p.dir.join(&p.new_name);
        if to.exists() {
            tracing::warn!(
                "not renaming {}: {} already exists",
                from.display(),
                to.display()
            );
            continue;
        }
        tokio::fs::rename(&from, &to)
            .await
            .with_context(|| format!("rename {} to {}", from.display(), to.display()))?;
        let tracked = store.rename_local_filename(&p.old_name, &p.new_name).await? > 0;
        tracing::info!("Renamed {} to {}", p.old_name, p.new_name);
        renames.push(Rename {
            dir: p.dir,
            old_name: p.old_name,
            new_name: p.new_name,
            tracked,
        });
    }
    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Favorite;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0";

    #[test]
    fn corrected_name_cases() {
        assert_eq!(corrected_name("a-b.jpg", "png").as_deref(), Some("a-b.png"));
        assert_eq!(corrected_name("a-b.png", "png"), None);
        assert_eq!(corrected_name("a.b.c.gif", "jpg").as_deref(), Some("a.b.c.jpg"));
        assert_eq!(corrected_name("noext", "gif").as_deref(), Some("noext.gif"));
        assert_eq!(corrected_name(".hidden", "png").as_deref(), Some(".hidden.png"));
    }

    async fn store_with_file(name: &str) -> Store {
        let store = Store::open_memory().await.unwrap();
        store
            .insert_favorites(&[Favorite::new("/view/1/", "Pic", "someone")])
            .await
            .unwrap();
        store
            .record_resolution("/view/1/", "https://cdn.example/1.jpg")
            .await
            .unwrap();
        store.set_local_filename("/view/1/", name).await.unwrap();
        store
    }

    #[tokio::test]
    async fn png_with_jpg_extension_is_renamed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("someone-pic.jpg"), PNG).unwrap();
        let store = store_with_file("someone-pic.jpg").await;

        let renames = correct_extensions(&store, dir.path()).await.unwrap();
        assert_eq!(renames.len(), 1);
        assert_eq!(renames[0].new_name, "someone-pic.png");
        assert!(renames[0].tracked);

        assert!(!dir.path().join("someone-pic.jpg").exists());
        assert_eq!(std::fs::read(dir.path().join("someone-pic.png")).unwrap(), PNG);
        let item = store.get_item("/view/1/").await.unwrap().unwrap();
        assert_eq!(item.local_filename.as_deref(), Some("someone-pic.png"));
    }

    #[tokio::test]
    async fn unknown_and_matching_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("story.jpg"), b"Once upon a time").unwrap();
        std::fs::write(dir.path().join("photo.jpg"), JPEG).unwrap();
        std::fs::write(dir.path().join("half.png.part"), JPEG).unwrap();
        let store = store_with_file("story.jpg").await;

        let renames = correct_extensions(&store, dir.path()).await.unwrap();
        assert!(renames.is_empty());
        assert!(dir.path().join("story.jpg").exists());
        assert!(dir.path().join("photo.jpg").exists());
        assert!(dir.path().join("half.png.part").exists());
        let item = store.get_item("/view/1/").await.unwrap().unwrap();
        assert_eq!(item.local_filename.as_deref(), Some("story.jpg"));
    }

    #[tokio::test]
    async fn existing_target_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x.jpg"), PNG).unwrap();
        std::fs::write(dir.path().join("x.png"), b"keep me").unwrap();
        let store = Store::open_memory().await.unwrap();

        let renames = correct_extensions(&store, dir.path()).await.unwrap();
        assert!(renames.is_empty());
        assert_eq!(std::fs::read(dir.path().join("x.png")).unwrap(), b"keep me");
    }

    #[tokio::test]
    async fn untracked_and_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("older");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("anim.png"), b"GIF89a\x01\0").unwrap();
        let store = Store::open_memory().await.unwrap();

        let renames = correct_extensions(&store, dir.path()).await.unwrap();
        assert_eq!(renames.len(), 1);
        assert_eq!(renames[0].dir, sub);
        assert!(!renames[0].tracked);
        assert!(sub.join("anim.gif").exists());
    }

    #[tokio::test]
    async fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_memory().await.unwrap();
        let renames = correct_extensions(&store, &dir.path().join("nope")).await.unwrap();
        assert!(renames.is_empty());
    }
}
