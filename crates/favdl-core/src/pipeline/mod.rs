//! Pipeline orchestrator.
//!
//! Drives the three remote phases over one store and one fetcher:
//! discover (listing pages → rows) → resolve (detail page → download link)
//! → download (link → file on disk). Each phase re-queries the store for what
//! remains, so every phase is idempotent and an interrupted run resumes.
//! Remote calls are strictly sequential and separated by the configured delay.

mod discover;
mod download;
mod report;
mod resolve;
mod throttle;

pub use discover::DiscoverError;
pub use report::{DiscoverReport, DownloadReport, ResolveReport, RunReport, StopReason};
pub use throttle::Throttle;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::FavdlConfig;
use crate::fetch::{Fetch, FetchError};
use crate::fixext::{self, Rename};
use crate::store::Store;

/// Knobs the pipeline needs, lifted out of [`FavdlConfig`].
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Site root without trailing slash.
    pub base_url: String,
    pub delay: Duration,
    pub download_dir: PathBuf,
    pub max_listing_pages: usize,
    pub max_resolve_attempts: u32,
}

impl PipelineSettings {
    pub fn from_config(cfg: &FavdlConfig) -> Self {
        Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            delay: cfg.delay(),
            download_dir: cfg.download_dir.clone(),
            max_listing_pages: cfg.max_listing_pages.max(1),
            max_resolve_attempts: cfg.max_resolve_attempts,
        }
    }
}

/// Which phases [`Pipeline::run`] executes, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phases {
    pub discover: bool,
    pub resolve: bool,
    pub download: bool,
    pub fix_extensions: bool,
}

impl Phases {
    pub fn all() -> Self {
        Self {
            discover: true,
            resolve: true,
            download: true,
            fix_extensions: true,
        }
    }
}

/// One pipeline run: the store, the fetcher and the throttle shared by all phases.
pub struct Pipeline {
    store: Store,
    fetcher: Arc<dyn Fetch>,
    settings: PipelineSettings,
    throttle: Throttle,
}

impl Pipeline {
    pub fn new(store: Store, fetcher: Arc<dyn Fetch>, settings: PipelineSettings) -> Self {
        let throttle = Throttle::new(settings.delay);
        Self {
            store,
            fetcher,
            settings,
            throttle,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Remote calls issued by this pipeline so far.
    pub fn remote_calls(&self) -> u64 {
        self.throttle.calls()
    }

    /// Absolute URL for a site path such as `/view/123/`.
    fn site_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.settings.base_url, path)
        }
    }

    /// Throttled page GET. The outer error is a failed blocking task; the inner
    /// one is the fetch outcome the phase decides on.
    async fn get_page(&self, url: &str) -> Result<Result<String, FetchError>> {
        self.throttle.wait().await;
        tracing::debug!("GET {}", url);
        let fetcher = Arc::clone(&self.fetcher);
        let url = url.to_string();
        tokio::task::spawn_blocking(move || fetcher.get_page(&url))
            .await
            .context("fetch task join")
    }

    /// Offline extension repair over the downloads directory.
    pub async fn fix_extensions(&self) -> Result<Vec<Rename>> {
        fixext::correct_extensions(&self.store, &self.settings.download_dir).await
    }

    /// Run the selected phases in order. `username` is required when discovery is selected.
    pub async fn run(&self, username: Option<&str>, phases: Phases) -> Result<RunReport> {
        let mut report = RunReport::default();
        if phases.discover {
            let Some(username) = username else {
                anyhow::bail!("discovery needs a username");
            };
            report.discover = Some(self.discover(username).await?);
        }
        if phases.resolve {
            report.resolve = Some(self.resolve().await?);
        }
        if phases.download {
            report.download = Some(self.download().await?);
        }
        if phases.fix_extensions {
            report.renames = Some(self.fix_extensions().await?);
        }
        Ok(report)
    }
}
