//! Reachability check over plain HTTP.

use log::debug;

use crate::check::outcome::CheckOutcome;
use crate::check::target::SiteTarget;
use crate::config::BasicAuth;

/// Checks whether a site's plain-HTTP endpoint is reachable.
///
/// Sends a single GET to `http://<host>` (credentials applied when Basic
/// Auth is configured) and maps the response:
///
/// - 400–499 → [`CheckOutcome::NotFound`]
/// - 500 and above → [`CheckOutcome::ServerError`]
/// - any other status, including redirects → [`CheckOutcome::Ok`]
/// - any transport failure (DNS, refused connection, request timeout) →
///   [`CheckOutcome::Unreachable`]
///
/// The check always resolves to an outcome; transport errors never propagate
/// past this boundary. No retries are attempted.
pub async fn check_reachability(
    client: &reqwest::Client,
    target: &SiteTarget,
    auth: Option<&BasicAuth>,
) -> CheckOutcome {
    let mut request = client.get(target.plain_endpoint());
    if let Some(auth) = auth {
        request = request.basic_auth(&auth.username, Some(&auth.password));
    }

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_client_error() {
                CheckOutcome::NotFound
            } else if status.is_server_error() {
                CheckOutcome::ServerError
            } else {
                CheckOutcome::Ok
            }
        }
        Err(e) => {
            debug!("Reachability check failed for {}: {e}", target.display());
            CheckOutcome::Unreachable
        }
    }
}
