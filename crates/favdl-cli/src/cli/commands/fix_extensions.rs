//! `favdl fix-extensions` – offline extension repair.

use anyhow::Result;
use favdl_core::config::FavdlConfig;
use favdl_core::fixext::{self, Rename};

use super::open_store;

pub async fn run_fix_extensions(cfg: &FavdlConfig) -> Result<()> {
    let store = open_store(cfg).await?;
    let renames = fixext::correct_extensions(&store, &cfg.download_dir).await?;
    print_renames(&renames);
    Ok(())
}

pub(crate) fn print_renames(renames: &[Rename]) {
    if renames.is_empty() {
        println!("All file extensions match their content.");
        return;
    }
    for r in renames {
        println!("{} -> {}", r.dir.join(&r.old_name).display(), r.new_name);
    }
    println!("Renamed {} file(s).", renames.len());
}
