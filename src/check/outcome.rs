//! Check outcome enumeration.
//!
//! A `CheckOutcome` describes one checked dimension (reachability or SSL) of
//! one site. It is a value, never a raw response object, and carries no
//! identity beyond itself.

use strum_macros::EnumIter as EnumIterMacro;

/// Result of a single check dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum CheckOutcome {
    /// The check passed
    Ok,
    /// The endpoint answered with a 4xx status
    NotFound,
    /// The endpoint answered with a 5xx status
    ServerError,
    /// The endpoint could not be reached (DNS, connect, or transport failure)
    Unreachable,
    /// The TLS handshake or certificate verification failed
    InvalidCertificate,
    /// The check exceeded its deadline
    Timeout,
}

impl CheckOutcome {
    /// Returns `true` if the outcome represents a passing check.
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckOutcome::Ok)
    }

    /// Issue text for this outcome on the reachability dimension.
    ///
    /// Returns `None` for a passing check.
    pub fn reachability_issue(&self) -> Option<&'static str> {
        match self {
            CheckOutcome::Ok => None,
            CheckOutcome::NotFound => Some("Page not found (4xx response)"),
            CheckOutcome::ServerError => Some("Server error (5xx response)"),
            CheckOutcome::Unreachable => Some("Site is unreachable"),
            CheckOutcome::InvalidCertificate => Some("TLS failure on plain endpoint"),
            CheckOutcome::Timeout => Some("Reachability check timed out"),
        }
    }

    /// Issue text for this outcome on the SSL dimension.
    ///
    /// Returns `None` for a passing check.
    pub fn ssl_issue(&self) -> Option<&'static str> {
        match self {
            CheckOutcome::Ok => None,
            CheckOutcome::Timeout => Some("SSL check timed out"),
            // The SSL checker itself only produces Ok, InvalidCertificate,
            // or Timeout; any other variant still renders as a certificate
            // problem rather than silently passing.
            _ => Some("SSL certificate is invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ok_has_no_issue_text() {
        assert!(CheckOutcome::Ok.reachability_issue().is_none());
        assert!(CheckOutcome::Ok.ssl_issue().is_none());
        assert!(CheckOutcome::Ok.is_ok());
    }

    #[test]
    fn test_every_failure_has_issue_text() {
        for outcome in CheckOutcome::iter().filter(|o| !o.is_ok()) {
            assert!(
                outcome.reachability_issue().is_some(),
                "{outcome:?} should describe a reachability issue"
            );
            assert!(
                outcome.ssl_issue().is_some(),
                "{outcome:?} should describe an SSL issue"
            );
        }
    }

    #[test]
    fn test_status_code_issue_texts() {
        assert_eq!(
            CheckOutcome::NotFound.reachability_issue(),
            Some("Page not found (4xx response)")
        );
        assert_eq!(
            CheckOutcome::ServerError.reachability_issue(),
            Some("Server error (5xx response)")
        );
        assert_eq!(
            CheckOutcome::Unreachable.reachability_issue(),
            Some("Site is unreachable")
        );
        assert_eq!(
            CheckOutcome::InvalidCertificate.ssl_issue(),
            Some("SSL certificate is invalid")
        );
    }
}
