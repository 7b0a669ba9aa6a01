//! SSL validity check over HTTPS.

use log::debug;

use crate::check::outcome::CheckOutcome;
use crate::check::target::SiteTarget;

/// Checks whether a site's HTTPS endpoint presents a valid certificate.
///
/// Sends a single GET to `https://<host>` with full certificate verification
/// (hostname and chain validation, no bypass). A completed exchange is
/// [`CheckOutcome::Ok`] regardless of the HTTP status: SSL validity is
/// orthogonal to application-level errors. Any handshake, verification, or
/// transport failure resolves to [`CheckOutcome::InvalidCertificate`].
///
/// Like the reachability check, this never propagates an error.
pub async fn check_ssl(client: &reqwest::Client, target: &SiteTarget) -> CheckOutcome {
    match client.get(target.secure_endpoint()).send().await {
        Ok(_) => CheckOutcome::Ok,
        Err(e) => {
            debug!("SSL check failed for {}: {e}", target.display());
            CheckOutcome::InvalidCertificate
        }
    }
}
