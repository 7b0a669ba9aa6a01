//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, concurrency limits, and the notification
//! endpoint.

use std::time::Duration;

/// Maximum concurrent site evaluations (default).
///
/// Site evaluations are independent, so they can run in parallel. Eight keeps
/// a full run fast without hammering the monitored hosts from one source IP.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Per-request HTTP timeout in seconds (default).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Hard deadline for a single check call.
///
/// Covers the HTTP timeout (10s) plus connection setup so one stalled site
/// cannot hold up the whole run. A check that exceeds this deadline resolves
/// to `CheckOutcome::Timeout`.
pub const CHECK_DEADLINE: Duration = Duration::from_secs(15);

/// Default notification endpoint (LINE Notify).
pub const DEFAULT_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";

/// Offset of the report timezone (JST, UTC+9) in seconds.
pub const REPORT_TZ_OFFSET_SECS: i32 = 9 * 3600;

/// Timestamp format used in the report header.
pub const REPORT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// User-Agent header sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = concat!("sitewatch/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length accepted from the configuration document.
///
/// Matches common browser and server limits; longer entries are skipped with
/// a warning instead of failing the run.
pub const MAX_URL_LENGTH: usize = 2048;
