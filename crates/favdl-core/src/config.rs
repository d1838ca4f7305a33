use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP client parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent sent with every request. Defaults to a desktop Chrome string.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout in seconds (applies to file downloads too).
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: crate::fetch::DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 300,
        }
    }
}

/// Global configuration loaded from `~/.config/favdl/config.toml`.
///
/// Relative paths (`cookie_file`, `database`, `download_dir`) resolve against
/// the working directory of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavdlConfig {
    /// Site root; listing and detail URLs are built from it.
    pub base_url: String,
    /// Pause after every remote call, in seconds.
    pub delay_secs: f64,
    /// File holding the session cookie.
    pub cookie_file: PathBuf,
    /// SQLite database file.
    pub database: PathBuf,
    /// Directory downloads are written to.
    pub download_dir: PathBuf,
    /// Upper bound on listing pages fetched by one discovery run.
    pub max_listing_pages: usize,
    /// Failed resolution attempts after which an item is no longer retried.
    pub max_resolve_attempts: u32,
    /// Optional HTTP section; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for FavdlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.furaffinity.net".to_string(),
            delay_secs: 1.0,
            cookie_file: PathBuf::from("cookie"),
            database: PathBuf::from("fa_download.db"),
            download_dir: PathBuf::from("downloads"),
            max_listing_pages: 1000,
            max_resolve_attempts: 3,
            http: None,
        }
    }
}

impl FavdlConfig {
    /// Delay between remote calls. Negative or NaN values collapse to zero.
    pub fn delay(&self) -> Duration {
        if self.delay_secs.is_finite() && self.delay_secs > 0.0 {
            Duration::from_secs_f64(self.delay_secs)
        } else {
            Duration::ZERO
        }
    }

    pub fn http_or_default(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("favdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FavdlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path (`--config`, tests).
pub fn load_or_init_at(path: &Path) -> Result<FavdlConfig> {
    if !path.exists() {
        let default_cfg = FavdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: FavdlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
