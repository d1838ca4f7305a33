//! Item read operations: work queues, lookups, listing, stats.

use anyhow::Result;
use sqlx::Row;

use super::super::db::Store;
use super::super::types::{Item, PendingDownload, PendingResolution, StoreStats};
use super::{item_from_row, ITEM_COLUMNS};

impl Store {
    /// Number of rows in the store.
    pub async fn row_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM favorites")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    /// Items without a download link that have fewer than `max_attempts` failed
    /// resolution attempts, oldest first.
    pub async fn pending_resolution(&self, max_attempts: u32) -> Result<Vec<PendingResolution>> {
        let rows = sqlx::query(
            r#"
            SELECT id, view_reference, resolve_attempts
            FROM favorites
            WHERE download_link IS NULL
              AND resolve_attempts < ?1
            ORDER BY id ASC
            "#,
        )
        .bind(i64::from(max_attempts))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| PendingResolution {
                id: row.get("id"),
                view_reference: row.get("view_reference"),
                resolve_attempts: row.get("resolve_attempts"),
            })
            .collect())
    }

    /// Items with a download link but no local file, oldest first.
    pub async fn pending_downloads(&self) -> Result<Vec<PendingDownload>> {
        let rows = sqlx::query(
            r#"
            SELECT id, view_reference, title, author, download_link
            FROM favorites
            WHERE download_link IS NOT NULL
              AND local_filename IS NULL
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| PendingDownload {
                id: row.get("id"),
                view_reference: row.get("view_reference"),
                title: row.get("title"),
                author: row.get("author"),
                download_link: row.get("download_link"),
            })
            .collect())
    }

    /// Fetch a single item by view reference.
    pub async fn get_item(&self, view_reference: &str) -> Result<Option<Item>> {
        let sql = format!("SELECT {} FROM favorites WHERE view_reference = ?1", ITEM_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(view_reference)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(item_from_row))
    }

    /// All items in insertion order.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let sql = format!("SELECT {} FROM favorites ORDER BY id ASC", ITEM_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(item_from_row).collect())
    }

    /// Every recorded local filename (used to avoid reusing a name that is
    /// assigned in the store but not on disk, e.g. after a manual move).
    pub async fn local_filenames(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"SELECT local_filename FROM favorites WHERE local_filename IS NOT NULL"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(|row| row.get("local_filename")).collect())
    }

    /// Per-stage counts. `max_attempts` splits unresolved items into
    /// still-pending and given-up.
    pub async fn stats(&self, max_attempts: u32) -> Result<StoreStats> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(SUM(download_link IS NOT NULL), 0) AS resolved,
                COALESCE(SUM(local_filename IS NOT NULL), 0) AS downloaded,
                COALESCE(SUM(download_link IS NULL AND resolve_attempts < ?1), 0) AS awaiting,
                COALESCE(SUM(download_link IS NULL AND resolve_attempts >= ?1), 0) AS unresolvable
            FROM favorites
            "#,
        )
        .bind(i64::from(max_attempts))
        .fetch_one(&self.pool)
        .await?;

        Ok(StoreStats {
            total: row.get("total"),
            resolved: row.get("resolved"),
            downloaded: row.get("downloaded"),
            awaiting_resolution: row.get("awaiting"),
            unresolvable: row.get("unresolvable"),
        })
    }
}
