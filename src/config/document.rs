//! Site-check configuration document.
//!
//! The list of monitored websites and the notification credential arrive as a
//! JSON document. In production that document is fetched from external
//! storage by the scheduler environment; the entry point hands the retrieved
//! bytes (or a local file path) to this module. The rest of the application
//! only ever sees the parsed struct.

use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::check::SiteTarget;
use crate::error_handling::ConfigError;

/// Basic-Auth credentials applied to reachability checks.
#[derive(Debug, Clone, Deserialize)]
pub struct BasicAuth {
    /// Username for HTTP Basic authentication
    pub username: String,
    /// Password for HTTP Basic authentication
    pub password: String,
}

/// Parsed site-check configuration document.
///
/// Expected JSON shape:
///
/// ```json
/// {
///     "line_token": "...",
///     "websites": ["https://example.com", "https://example.org"],
///     "basic_auth": { "username": "user", "password": "pass" }
/// }
/// ```
///
/// `basic_auth` is optional. The struct is immutable input: it is supplied
/// once per run and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCheckConfig {
    /// Bearer token for the notification endpoint
    pub line_token: String,
    /// Ordered list of monitored website URLs
    pub websites: Vec<String>,
    /// Optional Basic-Auth credentials for the reachability checks
    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,
}

impl SiteCheckConfig {
    /// Parses a configuration document from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the document is not valid JSON
    /// or is missing required fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads a configuration document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Resolves the configured website list into validated check targets.
    ///
    /// Invalid entries (unparseable URLs, unsupported schemes, oversized
    /// strings) are skipped with a warning rather than failing the run; the
    /// remaining targets keep their original input order.
    pub fn targets(&self) -> Vec<SiteTarget> {
        self.websites
            .iter()
            .filter_map(|raw| match SiteTarget::parse(raw) {
                Some(target) => Some(target),
                None => {
                    warn!("Skipping invalid website entry: {raw}");
                    None
                }
            })
            .collect()
    }
}
