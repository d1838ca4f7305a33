//! Flat CSV export of the whole store.

use anyhow::{Context, Result};
use std::path::Path;

use super::db::Store;

/// Header row of the export, in column order.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "view_reference",
    "title",
    "author",
    "discovered_at",
    "download_link",
    "resolved_at",
    "local_filename",
    "resolve_attempts",
    "last_attempt_at",
];

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl Store {
    /// Write every row to `writer` as CSV with a header row. NULLs become empty fields.
    /// Returns the number of data rows written.
    pub async fn export_csv_to<W: std::io::Write>(&self, writer: W) -> Result<usize> {
        let items = self.list_items().await?;
        let mut w = csv::Writer::from_writer(writer);
        w.write_record(EXPORT_COLUMNS)?;
        for item in &items {
            w.write_record([
                item.view_reference.clone(),
                opt(&item.title),
                opt(&item.author),
                item.discovered_at.to_string(),
                opt(&item.download_link),
                opt(&item.resolved_at),
                opt(&item.local_filename),
                item.resolve_attempts.to_string(),
                opt(&item.last_attempt_at),
            ])?;
        }
        w.flush()?;
        Ok(items.len())
    }

    /// Export to a file at `path` (created or truncated).
    pub async fn export_csv(&self, path: &Path) -> Result<usize> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        let n = self.export_csv_to(file).await?;
        tracing::info!("exported {} rows to {}", n, path.display());
        Ok(n)
    }
}
