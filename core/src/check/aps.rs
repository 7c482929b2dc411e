//! Controller-wide check: every AP, summarized in one verdict.

use arubacheck_common::config::{Threshold, Thresholds};
use arubacheck_common::record::Record;
use arubacheck_common::transport::Transport;
use tracing::info;

use crate::check::format::{ap_summary, display_name};
use crate::check::{is_offline, unknown};
use crate::derived::MEM_USAGE;
use crate::error::ProbeError;
use crate::poll::poll_devices;
use crate::profile::Profile;
use crate::report::{PerfData, Report};
use crate::threshold::{Classify, Severity};

/// Shown instead of any result when the controller times out.
pub const UNREACHABLE: &str = "Aruba virtual controller not reachable via SNMP";

struct Metric {
    field: &'static str,
    label: &'static str,
}

const CPU: Metric = Metric {
    field: "cpu_usage",
    label: "CPU usage",
};

const MEMORY: Metric = Metric {
    field: MEM_USAGE,
    label: "free memory",
};

pub fn check<T>(transport: &mut T, profile: &Profile, thresholds: &Thresholds) -> Result<Report, ProbeError>
where
    T: Transport + ?Sized,
{
    let aps: Vec<Record> = poll_devices(transport, profile)?;
    info!("Polled {} APs using the {} profile", aps.len(), profile.name);
    Ok(evaluate(aps, thresholds))
}

/// Like [`check`], with any fatal error reported as `UNKNOWN`.
pub fn run<T>(transport: &mut T, profile: &Profile, thresholds: &Thresholds) -> Report
where
    T: Transport + ?Sized,
{
    check(transport, profile, thresholds).unwrap_or_else(|err| unknown(err, UNREACHABLE))
}

pub fn evaluate(mut aps: Vec<Record>, thresholds: &Thresholds) -> Report {
    aps.sort_by_key(display_name);
    let mut report = Report::new();

    let (offline, online): (Vec<&Record>, Vec<&Record>) = aps.iter().partition(|ap| is_offline(ap));
    if offline.is_empty() {
        report.pass();
    } else {
        report.raise(
            Severity::Critical,
            format!("{} offline APs detected on {} APs", offline.len(), aps.len()),
        );
    }

    check_metric(&mut report, &aps, &CPU, &thresholds.cpu);
    check_metric(&mut report, &aps, &MEMORY, &thresholds.memory);

    report.success(format!("All {} APs are online and in optimal state", aps.len()));
    report.metric(PerfData::new("aps", aps.len()).bounds(Some(0.0), None));
    report.metric(
        PerfData::new("offline_aps", offline.len()).bounds(Some(0.0), Some(aps.len() as f64)),
    );

    if !offline.is_empty() {
        report.detail("Offline APs:");
        for ap in &offline {
            report.detail(format!("- {}", ap_summary(ap)));
        }
        report.detail("Online APs:");
    }
    for ap in &online {
        report.detail(format!("- {}", ap_summary(ap)));
    }

    report
}

/// Groups APs by the severity of one metric and raises one reason per group.
fn check_metric(report: &mut Report, aps: &[Record], metric: &Metric, threshold: &Threshold) {
    let mut critical: Vec<String> = Vec::new();
    let mut warning: Vec<String> = Vec::new();

    for ap in aps {
        let Some(value) = ap.number(metric.field) else {
            continue;
        };
        match threshold.classify(value) {
            Severity::Critical => critical.push(display_name(ap)),
            Severity::Warning => warning.push(display_name(ap)),
            _ => {}
        }
    }

    for (severity, bound, names) in [
        (Severity::Critical, threshold.critical, critical),
        (Severity::Warning, threshold.warning, warning),
    ] {
        if names.is_empty() {
            report.pass();
            continue;
        }
        report.raise(
            severity,
            format!(
                "{} APs with {} {} (>={bound}%): {}",
                names.len(),
                severity.label().to_lowercase(),
                metric.label,
                names.join(", ")
            ),
        );
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
