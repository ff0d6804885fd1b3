//! CLI for imgfetch.

mod prompt;
mod session;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config::{self, AppConfig, FetcherConfig};
use imgfetch_core::fetch::Fetcher;
use imgfetch_core::logging;
use std::io;

pub use session::run_session;

/// Prompt for image URLs and save every image they point to into ./Fetched_Images.
#[derive(Debug, Parser)]
#[command(name = "imgfetch", version)]
#[command(about = "Fetch images from URLs typed at the prompt", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = init_config_and_logging();
        tracing::debug!("loaded config: {:?}", cfg);

        let fetcher = Fetcher::new(&FetcherConfig::default());
        let summary = run_session(io::stdin().lock(), io::stdout().lock(), &fetcher)?;
        tracing::debug!(?summary, "session done");
        Ok(())
    }
}

/// Loads the config file and installs the log subscriber. Neither failure is
/// fatal: defaults and stderr logging are used instead.
fn init_config_and_logging() -> AppConfig {
    let (cfg, config_err) = match config::load_or_init() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if !cfg.log_to_file {
        logging::init_logging_stderr(&cfg.log_filter);
    } else if let Err(e) = logging::init_logging(&cfg.log_filter) {
        logging::init_logging_stderr(&cfg.log_filter);
        tracing::warn!("file logging unavailable, using stderr: {:#}", e);
    }

    if let Some(e) = config_err {
        tracing::warn!("could not load config, using defaults: {:#}", e);
    }
    cfg
}
