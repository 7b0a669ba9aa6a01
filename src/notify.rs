//! Notification delivery.
//!
//! The report is pushed to the notification endpoint as an HTTP POST with a
//! bearer token and a `message` form field. Delivery failure is the caller's
//! problem to log; the checks already ran and their outcome does not depend
//! on whether the message arrived.

use anyhow::{bail, Context, Result};

/// Sends the report text to the notification endpoint.
///
/// # Errors
///
/// Returns an error if the request fails or the endpoint answers with a
/// non-2xx status. Callers treat this as degraded, not fatal.
pub(crate) async fn send_notification(
    client: &reqwest::Client,
    notify_url: &str,
    token: &str,
    message: &str,
) -> Result<()> {
    let response = client
        .post(notify_url)
        .bearer_auth(token)
        .form(&[("message", message)])
        .send()
        .await
        .context("notification request failed")?;

    let status = response.status();
    if !status.is_success() {
        bail!("notification endpoint returned {status}");
    }
    Ok(())
}
