//! Check target validation and endpoint derivation.
//!
//! Configured website entries are validated once, up front, into
//! [`SiteTarget`] values. A target knows how to derive the plain-HTTP
//! endpoint used by the reachability check and the HTTPS endpoint used by the
//! SSL check, both keyed off the original host and port.

use url::Url;

use crate::config::MAX_URL_LENGTH;

/// A validated website entry from the configuration document.
#[derive(Debug, Clone)]
pub struct SiteTarget {
    display: String,
    url: Url,
}

impl SiteTarget {
    /// Validates and normalizes a configured website entry.
    ///
    /// Adds an `https://` prefix if the entry has no scheme, then checks that
    /// the result parses as an http/https URL with a host. Entries longer
    /// than `MAX_URL_LENGTH` are rejected. Returns `None` for anything that
    /// should not be checked.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() > MAX_URL_LENGTH {
            return None;
        }

        let normalized = if !raw.starts_with("http://") && !raw.starts_with("https://") {
            format!("https://{raw}")
        } else {
            raw.to_string()
        };

        if normalized.len() > MAX_URL_LENGTH {
            return None;
        }

        let url = Url::parse(&normalized).ok()?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return None;
        }

        Some(Self {
            display: normalized,
            url,
        })
    }

    /// The normalized URL string as it appears in the report.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Host (and explicit port, if any) of the target.
    fn authority(&self) -> String {
        // parse() guarantees a host is present
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// The plain-HTTP endpoint queried by the reachability check.
    pub(crate) fn plain_endpoint(&self) -> String {
        format!("http://{}", self.authority())
    }

    /// The HTTPS endpoint queried by the SSL check.
    pub(crate) fn secure_endpoint(&self) -> String {
        format!("https://{}", self.authority())
    }
}
