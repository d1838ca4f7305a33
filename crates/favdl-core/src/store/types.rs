//! Types used by the favorites store.

/// Row identifier (insertion order).
pub type ItemId = i64;

/// Full row of the `favorites` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub view_reference: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub discovered_at: i64,
    pub download_link: Option<String>,
    pub resolved_at: Option<i64>,
    pub local_filename: Option<String>,
    pub resolve_attempts: i64,
    pub last_attempt_at: Option<i64>,
}

impl Item {
    pub fn stage(&self) -> ItemStage {
        match (&self.download_link, &self.local_filename) {
            (_, Some(_)) => ItemStage::Downloaded,
            (Some(_), None) => ItemStage::Resolved,
            (None, None) => ItemStage::Discovered,
        }
    }
}

/// Where an item is in discovered → resolved → downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStage {
    Discovered,
    Resolved,
    Downloaded,
}

impl ItemStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStage::Discovered => "discovered",
            ItemStage::Resolved => "resolved",
            ItemStage::Downloaded => "downloaded",
        }
    }
}

/// Item still waiting for a download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResolution {
    pub id: ItemId,
    pub view_reference: String,
    pub resolve_attempts: i64,
}

/// Item with a link but no file on disk yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDownload {
    pub id: ItemId,
    pub view_reference: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub download_link: String,
}

/// Counts shown by `favdl status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub total: i64,
    pub resolved: i64,
    pub downloaded: i64,
    /// No link yet, still below the attempt limit.
    pub awaiting_resolution: i64,
    /// No link and out of attempts.
    pub unresolvable: i64,
}
