//! `favdl export` – dump the database as CSV.

use anyhow::Result;
use favdl_core::config::FavdlConfig;
use std::path::Path;

use super::open_store;

pub async fn run_export(cfg: &FavdlConfig, path: &Path) -> Result<()> {
    let store = open_store(cfg).await?;
    if path == Path::new("-") {
        store.export_csv_to(std::io::stdout()).await?;
    } else {
        let n = store.export_csv(path).await?;
        println!("Exported {} row(s) to {}.", n, path.display());
    }
    Ok(())
}
