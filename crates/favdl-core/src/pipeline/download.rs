//! Download phase: resolved link → file in the downloads directory.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::sync::Arc;

use super::{DownloadReport, Pipeline};
use crate::fetch::FetchError;
use crate::naming::{derive_filename, unique_filename};
use crate::storage::PartFile;

impl Pipeline {
    /// Download every item that has a link but no local file. Names are
    /// `{author}-{title}.{ext}`, sanitized and made unique against the
    /// directory and the store. A failed fetch, or a part file that cannot be
    /// created for this item, is logged and skipped; the item stays eligible
    /// for the next run. A write failure during a transfer aborts the phase.
    pub async fn download(&self) -> Result<DownloadReport> {
        let dir = &self.settings.download_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create download dir {}", dir.display()))?;

        let pending = self.store.pending_downloads().await?;
        let total = pending.len();
        let mut taken: HashSet<String> = self.store.local_filenames().await?.into_iter().collect();
        let mut report = DownloadReport::default();

        for (idx, item) in pending.into_iter().enumerate() {
            tracing::info!("({} / {}) Downloading {}", idx + 1, total, item.download_link);
            report.attempted += 1;

            let name = derive_filename(item.author.as_deref(), item.title.as_deref(), &item.download_link);
            let name = unique_filename(dir, &name, &taken);
            let part = match PartFile::create(&dir.join(&name)) {
                Ok(part) => part,
                Err(e) => {
                    report.failed += 1;
                    tracing::error!("Download of {} skipped: {:#}", item.download_link, e);
                    continue;
                }
            };

            self.throttle.wait().await;
            let fetcher = Arc::clone(&self.fetcher);
            let link = item.download_link.clone();
            let (part, result) = tokio::task::spawn_blocking(move || {
                let mut part = part;
                let result = fetcher.get_bytes(&link, &mut part);
                (part, result)
            })
            .await
            .context("download task join")?;

            match result {
                Ok(bytes) => {
                    part.finalize()?;
                    self.store.set_local_filename(&item.view_reference, &name).await?;
                    tracing::debug!("saved {} ({} bytes)", name, bytes);
                    report.downloaded += 1;
                    report.bytes += bytes;
                    report.files.push(name.clone());
                    taken.insert(name);
                }
                Err(FetchError::Sink(e)) => {
                    drop(part);
                    return Err(e).with_context(|| format!("write {}", dir.join(&name).display()));
                }
                Err(e) => {
                    drop(part);
                    report.failed += 1;
                    tracing::error!("Download of {} failed: {}", item.download_link, e);
                }
            }
        }

        tracing::info!(
            "download: {} attempted, {} saved, {} failed",
            report.attempted,
            report.downloaded,
            report.failed
        );
        Ok(report)
    }
}
