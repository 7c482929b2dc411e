//! # Threshold Evaluator
//!
//! Classifies a metric against an inclusive warning/critical pair and merges
//! per-check results into one run severity. Merging never downgrades: the run
//! is as bad as its worst check.

use std::fmt;

use arubacheck_common::config::Threshold;

/// Monitoring-framework outcome. Ordered by badness; [`Severity::Unknown`] is
/// only produced when the device could not be read at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }

    /// Process exit code expected by the monitoring framework.
    pub fn exit_code(self) -> u8 {
        self as u8
    }

    pub fn merge(self, other: Severity) -> Severity {
        self.max(other)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `CRITICAL` from `critical` upwards, `WARNING` from `warning` upwards, else `OK`.
pub fn classify(value: f64, warning: f64, critical: f64) -> Severity {
    if value >= critical {
        Severity::Critical
    } else if value >= warning {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

/// Worst of `severities`; `OK` for none.
pub fn aggregate<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().fold(Severity::Ok, Severity::merge)
}

pub trait Classify {
    fn classify(&self, value: f64) -> Severity;
}

impl Classify for Threshold {
    fn classify(&self, value: f64) -> Severity {
        classify(value, self.warning, self.critical)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
