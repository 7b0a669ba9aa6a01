//! sitewatch library: scheduled website-health checking
//!
//! This library checks a configured list of websites for reachability and SSL
//! validity, folds the findings into a single human-readable report, and
//! pushes that report to a notification channel.
//!
//! # Example
//!
//! ```no_run
//! use sitewatch::{run_checks, Config, SiteCheckConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let sites = SiteCheckConfig::load(&config.config_file)?;
//!
//! let outcome = run_checks(&config, &sites).await?;
//! println!("{}", outcome.body);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod check;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod notify;
mod report;
mod run;

// Re-export public API
pub use check::{check_reachability, check_ssl, evaluate_site, CheckOutcome, SiteTarget};
pub use config::{BasicAuth, Config, LogFormat, LogLevel, SiteCheckConfig};
pub use error_handling::{ConfigError, InitializationError};
pub use models::{RunOutcome, RunReport, SiteResult};
pub use report::{compose, report_timezone};
pub use run::run_checks;
