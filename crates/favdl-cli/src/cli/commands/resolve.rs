//! `favdl resolve` – look up download links.

use anyhow::Result;
use favdl_core::config::FavdlConfig;
use favdl_core::pipeline::ResolveReport;

use super::open_pipeline;

pub async fn run_resolve(cfg: &FavdlConfig) -> Result<()> {
    let pipeline = open_pipeline(cfg).await?;
    let report = pipeline.resolve().await?;
    print_resolve(&report);
    Ok(())
}

pub(crate) fn print_resolve(report: &ResolveReport) {
    if report.attempted == 0 {
        println!("Nothing to resolve.");
        return;
    }
    println!(
        "Resolved {} of {} item(s); {} without link, {} failed.",
        report.resolved, report.attempted, report.missing, report.failed
    );
    if report.given_up > 0 {
        println!("{} item(s) reached the attempt limit and will not be retried.", report.given_up);
    }
}
