//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and runtime configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_NOTIFY_URL, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Runtime configuration for a check run.
///
/// This struct doubles as the CLI surface of the binary and the programmatic
/// configuration of the library. The site list and credentials live in a
/// separate document ([`crate::SiteCheckConfig`]) loaded from `config_file`;
/// everything here controls *how* the run executes, not *what* it checks.
///
/// # Examples
///
/// ```no_run
/// use sitewatch::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     config_file: PathBuf::from("config.json"),
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sitewatch",
    about = "Checks websites for reachability and SSL validity and pushes a summary notification."
)]
pub struct Config {
    /// Path to the JSON configuration document (websites, line_token, basic_auth)
    #[arg(default_value = "config.json")]
    pub config_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Maximum concurrent site evaluations
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Notification endpoint URL
    #[arg(long, default_value = DEFAULT_NOTIFY_URL)]
    pub notify_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("config.json"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            notify_url: DEFAULT_NOTIFY_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        // Each level should be more restrictive than the next
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.config_file, PathBuf::from("config.json"));
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.notify_url, DEFAULT_NOTIFY_URL);
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let config = Config::parse_from(["sitewatch"]);
        assert_eq!(config.config_file, PathBuf::from("config.json"));
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    }

    #[test]
    fn test_cli_parsing_overrides() {
        let config = Config::parse_from([
            "sitewatch",
            "sites.json",
            "--max-concurrency",
            "3",
            "--timeout-seconds",
            "5",
            "--notify-url",
            "http://127.0.0.1:9999/notify",
        ]);
        assert_eq!(config.config_file, PathBuf::from("sites.json"));
        assert_eq!(config.max_concurrency, 3);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.notify_url, "http://127.0.0.1:9999/notify");
    }
}
