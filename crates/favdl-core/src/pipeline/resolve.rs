//! Resolution phase: detail page → direct download link.

use anyhow::Result;

use super::{Pipeline, ResolveReport};
use crate::extract::extract_download_url;

impl Pipeline {
    /// Visit the detail page of every item that still lacks a download link
    /// and is below the attempt limit. A found link is stored with its
    /// timestamp. A page without a link counts as one attempt and leaves the
    /// link NULL, so the item is retried on later runs until the limit. A
    /// failed fetch is skipped without recording anything; outages and stale
    /// cookies never use up attempts.
    pub async fn resolve(&self) -> Result<ResolveReport> {
        let max_attempts = self.settings.max_resolve_attempts;
        let pending = self.store.pending_resolution(max_attempts).await?;
        let total = pending.len();
        let mut report = ResolveReport::default();

        for (idx, item) in pending.iter().enumerate() {
            tracing::info!(
                "({} / {}) Fetching download link of {}",
                idx + 1,
                total,
                item.view_reference
            );
            report.attempted += 1;
            let url = self.site_url(&item.view_reference);

            let body = match self.get_page(&url).await? {
                Ok(body) => body,
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!("detail page {} failed: {}; will retry next run", url, e);
                    continue;
                }
            };

            if let Some(link) = extract_download_url(&body) {
                tracing::debug!("{} -> {}", item.view_reference, link);
                self.store.record_resolution(&item.view_reference, &link).await?;
                report.resolved += 1;
                continue;
            }

            report.missing += 1;
            tracing::warn!("no download link on {}", url);
            let attempts = self.store.record_failed_resolution(&item.view_reference).await?;
            if attempts >= i64::from(max_attempts) {
                report.given_up += 1;
                tracing::warn!(
                    "{} unresolved after {} attempts; no longer retried",
                    item.view_reference,
                    attempts
                );
            }
        }

        tracing::info!(
            "resolution: {} attempted, {} resolved, {} without link, {} failed",
            report.attempted,
            report.resolved,
            report.missing,
            report.failed
        );
        Ok(report)
    }
}
