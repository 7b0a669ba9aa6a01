//! Site health checks.
//!
//! This module provides the two check dimensions (reachability over plain
//! HTTP, certificate validity over HTTPS), the closed outcome enumeration
//! they resolve to, and the per-site evaluator that combines them.
//!
//! Checks never fail as `Result`s: every network or protocol problem is
//! absorbed at the checker boundary and converted into a [`CheckOutcome`]
//! value.

mod evaluate;
mod outcome;
mod reachability;
mod ssl;
mod target;

// Re-export public API
pub use evaluate::evaluate_site;
pub use outcome::CheckOutcome;
pub use reachability::check_reachability;
pub use ssl::check_ssl;
pub use target::SiteTarget;
