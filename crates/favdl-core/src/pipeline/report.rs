//! Per-phase outcome summaries.

use crate::fixext::Rename;

/// Why the listing crawl ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last page had no next-page control.
    LastPage,
    /// A next-page token came back that was already followed.
    RepeatedToken,
    /// `max_listing_pages` pages were fetched.
    PageLimit,
    /// A later listing page could not be fetched.
    FetchFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverReport {
    pub pages: usize,
    /// Unique favorites seen across all pages.
    pub found: usize,
    /// Rows that were new to the store.
    pub inserted: u64,
    pub stop: StopReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub attempted: usize,
    pub resolved: usize,
    /// Page fetched but no usable download link on it.
    pub missing: usize,
    /// Detail page could not be fetched; not counted as an attempt.
    pub failed: usize,
    /// Items that reached the attempt limit during this run.
    pub given_up: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub attempted: usize,
    pub downloaded: usize,
    pub failed: usize,
    pub bytes: u64,
    /// Filenames written this run, in order.
    pub files: Vec<String>,
}

/// Outcome of [`super::Pipeline::run`]; `None` for phases that were not selected.
#[derive(Debug, Default)]
pub struct RunReport {
    pub discover: Option<DiscoverReport>,
    pub resolve: Option<ResolveReport>,
    pub download: Option<DownloadReport>,
    pub renames: Option<Vec<Rename>>,
}
