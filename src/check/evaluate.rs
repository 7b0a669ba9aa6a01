//! Per-site evaluation.

use crate::check::outcome::CheckOutcome;
use crate::check::reachability::check_reachability;
use crate::check::ssl::check_ssl;
use crate::check::target::SiteTarget;
use crate::config::{BasicAuth, CHECK_DEADLINE};
use crate::models::SiteResult;

/// Evaluates one site: reachability first, then SSL.
///
/// The SSL check runs unconditionally. A site can be down over plain HTTP
/// while its certificate is broken too; both problems belong in the report,
/// so the two checks are treated as independent signals rather than
/// short-circuited.
///
/// Each check is wrapped in a hard deadline ([`CHECK_DEADLINE`]) so one
/// stalled host cannot hold up the run; an elapsed deadline resolves to
/// [`CheckOutcome::Timeout`]. Evaluation itself cannot fail: every network
/// problem is already absorbed into an outcome value by the checkers.
pub async fn evaluate_site(
    client: &reqwest::Client,
    target: &SiteTarget,
    auth: Option<&BasicAuth>,
) -> SiteResult {
    let reachability =
        match tokio::time::timeout(CHECK_DEADLINE, check_reachability(client, target, auth)).await
        {
            Ok(outcome) => outcome,
            Err(_) => CheckOutcome::Timeout,
        };

    let ssl = match tokio::time::timeout(CHECK_DEADLINE, check_ssl(client, target)).await {
        Ok(outcome) => outcome,
        Err(_) => CheckOutcome::Timeout,
    };

    SiteResult {
        url: target.display().to_string(),
        reachability,
        ssl: Some(ssl),
    }
}
