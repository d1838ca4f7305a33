//! CLI command handlers, one per subcommand.

mod discover;
mod download;
mod export;
mod fix_extensions;
mod resolve;
mod run;
mod status;

pub use discover::run_discover;
pub use download::run_download;
pub use export::run_export;
pub use fix_extensions::run_fix_extensions;
pub use resolve::run_resolve;
pub use run::run_pipeline;
pub use status::run_status;

use anyhow::{Context, Result};
use favdl_core::config::FavdlConfig;
use favdl_core::fetch::HttpFetcher;
use favdl_core::pipeline::{Pipeline, PipelineSettings};
use favdl_core::store::Store;
use std::sync::Arc;

pub(crate) async fn open_store(cfg: &FavdlConfig) -> Result<Store> {
    Store::open(&cfg.database)
        .await
        .with_context(|| format!("open database {}", cfg.database.display()))
}

/// Store, fetcher and settings for a networked command.
pub(crate) async fn open_pipeline(cfg: &FavdlConfig) -> Result<Pipeline> {
    let store = open_store(cfg).await?;
    let fetcher = Arc::new(HttpFetcher::from_config(cfg));
    Ok(Pipeline::new(store, fetcher, PipelineSettings::from_config(cfg)))
}
