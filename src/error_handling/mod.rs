//! Error handling.
//!
//! Failures of a single site's checks are never errors here: they are
//! absorbed at the checker boundary and surfaced as `CheckOutcome` values.
//! The error types in this module cover the only failures allowed to
//! escalate — a run that has nothing meaningful to report (missing or
//! unparseable configuration) and initialization problems.

mod types;

// Re-export public API
pub use types::{ConfigError, InitializationError};
