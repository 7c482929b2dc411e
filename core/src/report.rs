//! # Status Report
//!
//! Rendered in the layout monitoring frameworks expect:
//!
//! ```text
//! WARNING - 1 APs with warning CPU usage (>=80%): ap-2 | 'aps'=2;;;0; 'offline_aps'=0;;;0;2
//! Online APs:
//! - ap-1 (IP: 10.0.0.1, CPU: 50%)
//! ```
//!
//! The first line carries the severity label, the reasons (or a success message)
//! and an optional metrics block; the following lines are free-form detail.

use std::fmt;

use arubacheck_common::config::Threshold;

use crate::threshold::{Severity, aggregate};

/// One `'label'=value[unit];warn;crit;min;max` metric.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    label: String,
    value: String,
    unit: &'static str,
    warning: Option<f64>,
    critical: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl PerfData {
    pub fn new(label: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            unit: "",
            warning: None,
            critical: None,
            min: None,
            max: None,
        }
    }

    pub fn unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    pub fn thresholds(mut self, threshold: &Threshold) -> Self {
        self.warning = Some(threshold.warning);
        self.critical = Some(threshold.critical);
        self
    }

    pub fn bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Shorthand for a `0..=100` percentage.
    pub fn percent(self) -> Self {
        self.unit("%").bounds(Some(0.0), Some(100.0))
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        write!(
            f,
            "'{}'={}{};{};{};{};{}",
            self.label.replace('\'', "''"),
            self.value,
            self.unit,
            opt(self.warning),
            opt(self.critical),
            opt(self.min),
            opt(self.max)
        )
    }
}

/// Collected outcome of one check run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    severities: Vec<Severity>,
    reasons: Vec<String>,
    success: Option<String>,
    perfdata: Vec<PerfData>,
    details: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fatal outcome: only the label and `message`, no metrics, no detail.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            severities: vec![Severity::Unknown],
            reasons: vec![message.into()],
            ..Self::default()
        }
    }

    /// Records the result of one check and, unless it is `OK`, why.
    pub fn raise(&mut self, severity: Severity, reason: impl Into<String>) {
        self.severities.push(severity);
        if severity != Severity::Ok {
            self.reasons.push(reason.into());
        }
    }

    /// Records a passing check.
    pub fn pass(&mut self) {
        self.severities.push(Severity::Ok);
    }

    /// Shown in place of reasons when there are none.
    pub fn success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    pub fn metric(&mut self, perfdata: PerfData) {
        self.perfdata.push(perfdata);
    }

    pub fn detail(&mut self, line: impl Into<String>) {
        self.details.push(line.into());
    }

    pub fn severity(&self) -> Severity {
        aggregate(self.severities.iter().copied())
    }

    pub fn exit_code(&self) -> u8 {
        self.severity().exit_code()
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn perfdata(&self) -> &[PerfData] {
        &self.perfdata
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// The first output line.
    pub fn status_line(&self) -> String {
        let text: String = if self.reasons.is_empty() {
            self.success.clone().unwrap_or_default()
        } else {
            self.reasons.join(", ")
        };

        let mut line: String = format!("{} - {}", self.severity(), text);
        if !self.perfdata.is_empty() {
            let metrics: Vec<String> = self.perfdata.iter().map(PerfData::to_string).collect();
            line.push_str(" | ");
            line.push_str(&metrics.join(" "));
        }
        line
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_line())?;
        for line in &self.details {
            write!(f, "\n{line}")?;
        }
        Ok(())
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
