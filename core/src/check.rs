//! # Checks
//!
//! The two monitoring checks built on a poll:
//!
//! * **[`aps`]**: every AP known to a controller, summarized.
//! * **[`ap`]**: one AP in depth, radio interfaces included.
//!
//! Each check splits into a polling entry point (`check`) and a pure
//! `evaluate` over already reconstructed records. `run` wraps `check` and turns
//! any fatal error into an `UNKNOWN` report.

use arubacheck_common::config::Threshold;
use arubacheck_common::record::Record;

use crate::error::ProbeError;
use crate::report::Report;
use crate::threshold::{Classify, Severity};

pub mod ap;
pub mod aps;
pub mod format;

/// Value of the `status` column for an AP that is up.
pub const ONLINE_STATUS: &str = "1";

/// An AP is offline when it reports any status other than [`ONLINE_STATUS`].
/// An AP without a status column is not counted as offline.
pub fn is_offline(ap: &Record) -> bool {
    ap.text("status").is_some_and(|status| status != ONLINE_STATUS)
}

/// `UNKNOWN` report for a failed run. A timeout shows `timeout_message` in place
/// of the transport error.
pub fn unknown(error: ProbeError, timeout_message: &str) -> Report {
    match error {
        ProbeError::Timeout => Report::unknown(timeout_message),
        other => Report::unknown(other.to_string()),
    }
}

/// Classifies `value` and records the outcome, naming `subject` on failure.
fn check_threshold(report: &mut Report, value: f64, threshold: &Threshold, subject: &str) -> Severity {
    let severity: Severity = threshold.classify(value);
    match severity {
        Severity::Critical => report.raise(severity, format!("{subject} >= {}%", threshold.critical)),
        Severity::Warning => report.raise(severity, format!("{subject} >= {}%", threshold.warning)),
        _ => report.pass(),
    }
    severity
}
