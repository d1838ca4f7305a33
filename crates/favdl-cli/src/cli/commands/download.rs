//! `favdl download` – fetch resolved files.

use anyhow::Result;
use favdl_core::config::FavdlConfig;
use favdl_core::pipeline::DownloadReport;

use super::open_pipeline;

pub async fn run_download(cfg: &FavdlConfig) -> Result<()> {
    let pipeline = open_pipeline(cfg).await?;
    let report = pipeline.download().await?;
    print_download(&report);
    Ok(())
}

pub(crate) fn print_download(report: &DownloadReport) {
    if report.attempted == 0 {
        println!("Nothing to download.");
        return;
    }
    println!(
        "Downloaded {} of {} file(s) ({:.1} MiB), {} failed.",
        report.downloaded,
        report.attempted,
        report.bytes as f64 / 1_048_576.0,
        report.failed
    );
}
