//! Fetch parameters and the user config file.
//!
//! [`FetcherConfig`] carries the fixed fetch policy. It is built from the
//! constants below and is not read from disk. [`AppConfig`] is the optional
//! `~/.config/imgfetch/config.toml` and only covers logging.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory (relative to the working directory) images are saved into.
pub const OUTPUT_DIR: &str = "Fetched_Images";
/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "Ubuntu-Image-Fetcher/1.0";
/// Connect timeout, and the longest a transfer may stall without data.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Largest accepted body, declared or received (10 MiB).
pub const MAX_CONTENT_LENGTH: u64 = 10 * 1024 * 1024;
pub const MAX_REDIRECTS: u32 = 10;

/// Default tracing filter when neither `RUST_LOG` nor the config file set one.
pub const DEFAULT_LOG_FILTER: &str = "info,imgfetch=debug";

/// Parameters of one fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_content_length: u64,
    pub max_redirects: u32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            max_content_length: MAX_CONTENT_LENGTH,
            max_redirects: MAX_REDIRECTS,
        }
    }
}

/// User configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// tracing `EnvFilter` directive; `RUST_LOG` still wins when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Log to `~/.local/state/imgfetch/imgfetch.log`; false logs to stderr.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_to_file: default_log_to_file(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let default_cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
