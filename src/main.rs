//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitewatch` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Configuration loading
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sitewatch::initialization::init_logger_with;
use sitewatch::{run_checks, Config, SiteCheckConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Configuration retrieval is a separate, fallible step: without a site
    // list and notification credential there is nothing to run.
    let sites = SiteCheckConfig::load(&config.config_file)
        .context("Failed to load site-check configuration")?;

    match run_checks(&config, &sites).await {
        Ok(outcome) => {
            println!("{}", outcome.body);
            Ok(())
        }
        Err(e) => {
            eprintln!("sitewatch error: {:#}", e);
            process::exit(1);
        }
    }
}
