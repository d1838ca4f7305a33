//! `favdl discover` – crawl the favorites listing.

use anyhow::Result;
use favdl_core::config::FavdlConfig;
use favdl_core::pipeline::DiscoverReport;

use super::open_pipeline;

pub async fn run_discover(cfg: &FavdlConfig, username: &str) -> Result<()> {
    let pipeline = open_pipeline(cfg).await?;
    let report = pipeline.discover(username).await?;
    print_discover(username, &report);
    Ok(())
}

pub(crate) fn print_discover(username: &str, report: &DiscoverReport) {
    println!(
        "Discovered {} favorites of {} on {} page(s), {} new.",
        report.found, username, report.pages, report.inserted
    );
    tracing::debug!("discovery stopped: {:?}", report.stop);
}
