//! CLI for the favdl favorites downloader.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use favdl_core::config::{self, FavdlConfig};
use favdl_core::pipeline::Phases;
use std::path::PathBuf;

use commands::{
    run_discover, run_download, run_export, run_fix_extensions, run_pipeline, run_resolve,
    run_status,
};

/// Top-level CLI for favdl.
#[derive(Debug, Parser)]
#[command(name = "favdl")]
#[command(about = "favdl: crawl a user's favorites, resolve download links and fetch the files", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for values normally taken from config.toml.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Config file to use instead of the XDG default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database holding the run state.
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Directory downloads are written to.
    #[arg(long, global = true, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// File holding the session cookie.
    #[arg(long, global = true, value_name = "PATH")]
    pub cookie: Option<PathBuf>,
}

impl GlobalArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, mut cfg: FavdlConfig) -> FavdlConfig {
        if let Some(p) = &self.database {
            cfg.database = p.clone();
        }
        if let Some(p) = &self.download_dir {
            cfg.download_dir = p.clone();
        }
        if let Some(p) = &self.cookie {
            cfg.cookie_file = p.clone();
        }
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Walk a user's favorites listing and record every item.
    Discover {
        /// Account whose favorites are crawled.
        username: String,
    },

    /// Look up the download link of every item that has none yet.
    Resolve,

    /// Download every resolved item that has no local file yet.
    Download,

    /// Rename downloads whose content does not match their extension.
    FixExtensions,

    /// Run the phases in order: discover, resolve, download, fix-extensions.
    Run {
        /// Account whose favorites are crawled. Not needed with --skip-discover.
        #[arg(required_unless_present = "skip_discover")]
        username: Option<String>,
        #[arg(long)]
        skip_discover: bool,
        #[arg(long)]
        skip_resolve: bool,
        #[arg(long)]
        skip_download: bool,
        /// Skip the extension repair pass.
        #[arg(long)]
        skip_fix: bool,
    },

    /// Show how far the items in the database have progressed.
    Status {
        /// Also list every item with its stage.
        #[arg(long)]
        list: bool,
    },

    /// Write all rows as CSV. Use "-" for stdout.
    Export {
        #[arg(default_value = "fa_download.csv")]
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.global.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        let cfg = cli.global.apply(cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Discover { username } => run_discover(&cfg, &username).await?,
            CliCommand::Resolve => run_resolve(&cfg).await?,
            CliCommand::Download => run_download(&cfg).await?,
            CliCommand::FixExtensions => run_fix_extensions(&cfg).await?,
            CliCommand::Run {
                username,
                skip_discover,
                skip_resolve,
                skip_download,
                skip_fix,
            } => {
                let phases = Phases {
                    discover: !skip_discover,
                    resolve: !skip_resolve,
                    download: !skip_download,
                    fix_extensions: !skip_fix,
                };
                run_pipeline(&cfg, username.as_deref(), phases).await?;
            }
            CliCommand::Status { list } => run_status(&cfg, list).await?,
            CliCommand::Export { path } => run_export(&cfg, &path).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
