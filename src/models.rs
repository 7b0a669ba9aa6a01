//! Data models shared across the check pipeline.

use chrono::{DateTime, FixedOffset};

use crate::check::CheckOutcome;

/// Aggregated result of checking a single site.
///
/// Created during evaluation of one URL, consumed immediately by the report
/// composer, and not retained after the run.
#[derive(Debug, Clone)]
pub struct SiteResult {
    /// The checked URL as it appears in the report
    pub url: String,
    /// Outcome of the reachability check
    pub reachability: CheckOutcome,
    /// Outcome of the SSL check; `None` only when the check was skipped
    pub ssl: Option<CheckOutcome>,
}

impl SiteResult {
    /// Human-readable issue lines for this site.
    ///
    /// SSL issue text precedes reachability issue text when both checks
    /// failed. Empty exactly when the site is healthy.
    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if let Some(text) = self.ssl.and_then(|outcome| outcome.ssl_issue()) {
            issues.push(text);
        }
        if let Some(text) = self.reachability.reachability_issue() {
            issues.push(text);
        }
        issues
    }

    /// Whether this site contributes to the report's issue count.
    pub fn has_issues(&self) -> bool {
        !self.issues().is_empty()
    }
}

/// The composed result of one complete check run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// When the run happened, in the report timezone (JST)
    pub checked_at: DateTime<FixedOffset>,
    /// Total number of sites checked
    pub total_sites: usize,
    /// Number of sites with at least one issue
    pub issue_count: usize,
    /// Full formatted report text sent to the notification channel
    pub body: String,
}

/// Structured result returned to the external trigger.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// HTTP-style status code; 200 on any normal completion
    pub status_code: u16,
    /// Completion message
    pub body: String,
}
