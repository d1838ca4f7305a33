//! `favdl run` – the phases in order over one store.

use anyhow::Result;
use favdl_core::config::FavdlConfig;
use favdl_core::pipeline::Phases;

use super::discover::print_discover;
use super::download::print_download;
use super::fix_extensions::print_renames;
use super::open_pipeline;
use super::resolve::print_resolve;

pub async fn run_pipeline(cfg: &FavdlConfig, username: Option<&str>, phases: Phases) -> Result<()> {
    let pipeline = open_pipeline(cfg).await?;
    let report = pipeline.run(username, phases).await?;

    if let (Some(username), Some(r)) = (username, &report.discover) {
        print_discover(username, r);
    }
    if let Some(r) = &report.resolve {
        print_resolve(r);
    }
    if let Some(r) = &report.download {
        print_download(r);
    }
    if let Some(r) = &report.renames {
        print_renames(r);
    }
    tracing::info!("run finished after {} remote call(s)", pipeline.remote_calls());
    Ok(())
}
