//! Item write operations. Each is a single statement (discovery: one
//! transaction), so an interrupted run never leaves a half-written row.

use anyhow::Result;

use super::super::db::{unix_timestamp, Store};
use crate::extract::Favorite;

impl Store {
    /// Insert newly discovered favorites. Known view references are ignored:
    /// their title, author, link and filename are left untouched.
    /// Returns the number of rows actually inserted.
    pub async fn insert_favorites<'a, I>(&self, favorites: I) -> Result<u64>
    where
        I: IntoIterator<Item = &'a Favorite>,
    {
        let now = unix_timestamp();
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;
        for fav in favorites {
            let r = sqlx::query(
                r#"
                INSERT OR IGNORE INTO favorites (
                    view_reference, title, author, discovered_at
                ) VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&fav.view_reference)
            .bind(&fav.title)
            .bind(&fav.author)
            .bind(now)
            .execute(&mut *tx)
            .await?;
            inserted += r.rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }

    /// Store the resolved download link and its timestamp.
    pub async fn record_resolution(&self, view_reference: &str, download_link: &str) -> Result<()> {
        let now = unix_timestamp();
        sqlx::query(
            r#"
            UPDATE favorites
            SET download_link = ?1,
                resolved_at = ?2
            WHERE view_reference = ?3
            "#,
        )
        .bind(download_link)
        .bind(now)
        .bind(view_reference)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Record a resolution attempt that produced no link. The link stays NULL;
    /// the attempt counter decides whether the item is tried again.
    /// Returns the new attempt count.
    pub async fn record_failed_resolution(&self, view_reference: &str) -> Result<i64> {
        let now = unix_timestamp();
        let attempts: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE favorites
            SET resolve_attempts = resolve_attempts + 1,
                last_attempt_at = ?1
            WHERE view_reference = ?2
              AND download_link IS NULL
            RETURNING resolve_attempts
            "#,
        )
        .bind(now)
        .bind(view_reference)
        .fetch_optional(&self.pool)
        .await?;
        Ok(attempts.unwrap_or(0))
    }

    /// Store the local filename of a finished download.
    pub async fn set_local_filename(&self, view_reference: &str, filename: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE favorites
            SET local_filename = ?1
            WHERE view_reference = ?2
            "#,
        )
        .bind(filename)
        .bind(view_reference)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Rewrite `local_filename` after an on-disk rename. Matches by old filename;
    /// returns the number of rows updated (0 if the file is not tracked).
    pub async fn rename_local_filename(&self, old: &str, new: &str) -> Result<u64> {
        let r = sqlx::query(
            r#"
            UPDATE favorites
            SET local_filename = ?1
            WHERE local_filename = ?2
            "#,
        )
        .bind(new)
        .bind(old)
        .execute(&self.pool)
        .await?;
        Ok(r.rows_affected())
    }
}
