//! Run coordination.
//!
//! The coordinator drives one complete check run: evaluate every configured
//! site, compose the report, hand it to the notifier, and report completion
//! to the external trigger.

use anyhow::{Context, Result};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use log::{info, warn};

use crate::check::evaluate_site;
use crate::config::{Config, SiteCheckConfig};
use crate::initialization::init_client;
use crate::models::{RunOutcome, SiteResult};
use crate::notify::send_notification;
use crate::report::{compose, report_timezone};

/// Completion message returned to the external trigger.
const COMPLETION_MESSAGE: &str = "Website check completed.";

/// Runs one complete check of the configured site list.
///
/// Sites are evaluated with bounded concurrency; results are slotted back
/// into input order before composing, so the report is identical to a
/// sequential run. The composed report is pushed to the notification
/// endpoint; delivery failure is logged and deliberately not escalated — the
/// checks already ran, and the run's completion status does not depend on the
/// notification channel.
///
/// # Errors
///
/// Returns an error only when the run cannot execute at all (HTTP client
/// initialization failure). Per-site problems are data, not errors.
pub async fn run_checks(config: &Config, sites: &SiteCheckConfig) -> Result<RunOutcome> {
    let client = init_client(config.timeout_seconds).context("Failed to initialize HTTP client")?;

    let targets = sites.targets();
    let auth = sites.basic_auth.as_ref();
    info!("Checking {} site(s)", targets.len());

    // Indexed slots keyed by input position: evaluations complete in any
    // order, the report must not.
    let mut slots: Vec<Option<SiteResult>> = vec![None; targets.len()];
    let mut evaluations = stream::iter(targets.iter().enumerate().map(|(index, target)| {
        let client = client.clone();
        async move { (index, evaluate_site(&client, target, auth).await) }
    }))
    .buffer_unordered(config.max_concurrency.max(1));

    while let Some((index, result)) = evaluations.next().await {
        slots[index] = Some(result);
    }
    drop(evaluations);
    let results: Vec<SiteResult> = slots.into_iter().flatten().collect();

    let checked_at = Utc::now().with_timezone(&report_timezone());
    let report = compose(&results, checked_at);
    info!(
        "Checked {} site(s), {} with issues",
        report.total_sites, report.issue_count
    );

    if let Err(e) = send_notification(
        &client,
        &config.notify_url,
        &sites.line_token,
        &report.body,
    )
    .await
    {
        warn!("Failed to deliver notification: {e:#}");
    }

    Ok(RunOutcome {
        status_code: 200,
        body: COMPLETION_MESSAGE.to_string(),
    })
}
