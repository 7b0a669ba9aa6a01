//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, endpoints)
//! - CLI option types and parsing
//! - The site-check configuration document (websites, credentials)

mod constants;
mod document;
mod types;

// Re-export all constants
pub use constants::*;
pub use document::{BasicAuth, SiteCheckConfig};
pub use types::{Config, LogFormat, LogLevel};
