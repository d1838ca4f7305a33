//! `favdl status` – progress counts from the database.

use anyhow::Result;
use favdl_core::config::FavdlConfig;

use super::open_store;

pub async fn run_status(cfg: &FavdlConfig, list: bool) -> Result<()> {
    let store = open_store(cfg).await?;
    let stats = store.stats(cfg.max_resolve_attempts).await?;
    if stats.total == 0 {
        println!("No favorites in database.");
        return Ok(());
    }
    println!("{:<22} {}", "favorites", stats.total);
    println!("{:<22} {}", "resolved", stats.resolved);
    println!("{:<22} {}", "downloaded", stats.downloaded);
    println!("{:<22} {}", "awaiting resolution", stats.awaiting_resolution);
    println!("{:<22} {}", "unresolvable", stats.unresolvable);

    if list {
        println!();
        println!("{:<6} {:<11} {:<20} {}", "ID", "STAGE", "VIEW", "FILE");
        for item in store.list_items().await? {
            println!(
                "{:<6} {:<11} {:<20} {}",
                item.id,
                item.stage().as_str(),
                item.view_reference,
                item.local_filename.as_deref().unwrap_or("-")
            );
        }
    }
    Ok(())
}
