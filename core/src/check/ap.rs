//! Single-AP check: device health plus every radio interface of that AP.

use arubacheck_common::config::Thresholds;
use arubacheck_common::record::Record;
use arubacheck_common::transport::Transport;
use tracing::info;

use crate::check::format::{ap_info, display_name, radio_info, radio_label};
use crate::check::{check_threshold, is_offline, unknown};
use crate::derived::MEM_USAGE;
use crate::poll::{DeviceSnapshot, find_device, poll_radios};
use crate::profile::Profile;
use crate::report::{PerfData, Report};
use crate::threshold::Severity;

/// Shown instead of any result when the AP (or its controller) times out.
pub const UNREACHABLE: &str = "Aruba AP not reachable via SNMP";

/// Shown when the AP answered but its radio table timed out.
pub const RADIOS_UNREACHABLE: &str = "Failed to retrieve radio status via SNMP";

/// Radio counters exported as metrics without thresholds: (label, field, unit).
const RADIO_COUNTERS: [(&str, &str, &str); 9] = [
    ("Noise", "noise", "dBm"),
    ("TX total frames", "tx_total_frames", ""),
    ("TX total bytes", "tx_total_bytes", ""),
    ("TX dropped frames", "tx_dropped_frames", ""),
    ("RX total frames", "rx_total_frames", ""),
    ("RX total bytes", "rx_total_bytes", ""),
    ("RX bad frames", "rx_bad_frames", ""),
    ("Physical events", "phy_events", ""),
    ("Clients", "clients_count", ""),
];

/// Polls the AP whose address is `address` and evaluates it. Fatal errors are
/// reported as `UNKNOWN`; a timeout while reading the radio table is told apart
/// from one while finding the AP.
pub fn run<T>(transport: &mut T, profile: &Profile, thresholds: &Thresholds, address: &str) -> Report
where
    T: Transport + ?Sized,
{
    let device: Record = match find_device(transport, profile, address) {
        Ok(device) => device,
        Err(err) => return unknown(err, UNREACHABLE),
    };
    let radios: Vec<Record> = match poll_radios(transport, profile, &device) {
        Ok(radios) => radios,
        Err(err) => return unknown(err, RADIOS_UNREACHABLE),
    };
    info!("Polled AP {address} with {} radio interfaces", radios.len());
    evaluate(&DeviceSnapshot { device, radios }, thresholds)
}

pub fn evaluate(snapshot: &DeviceSnapshot, thresholds: &Thresholds) -> Report {
    let ap: &Record = &snapshot.device;
    let name: String = display_name(ap);
    let mut report = Report::new();

    for (label, value) in ap_info(ap) {
        report.detail(format!("{label}: {value}"));
    }

    if is_offline(ap) {
        report.raise(Severity::Critical, format!("AP {name} is offline"));
    } else {
        report.pass();
    }

    if let Some(cpu) = ap.number("cpu_usage") {
        report.metric(PerfData::new("cpu", cpu).thresholds(&thresholds.cpu).percent());
        check_threshold(&mut report, cpu, &thresholds.cpu, "CPU usage");
    }

    if let Some(free_pct) = ap.number(MEM_USAGE) {
        report.metric(
            PerfData::new("mem", format!("{free_pct:.1}"))
                .thresholds(&thresholds.memory)
                .percent(),
        );
        check_threshold(&mut report, free_pct, &thresholds.memory, "Free memory");
    }

    for radio in &snapshot.radios {
        evaluate_radio(&mut report, radio, thresholds);
    }

    report.success(format!("AP {name} is online and in optimal state"));
    report
}

fn evaluate_radio(report: &mut Report, radio: &Record, thresholds: &Thresholds) {
    let label: String = radio_label(radio);

    if let Some(usage) = radio.number("usage") {
        check_threshold(
            report,
            usage,
            &thresholds.radio_usage,
            &format!("Interface {label} radio usage"),
        );
        report.metric(
            PerfData::new(format!("Interface {label} - Usage"), usage)
                .thresholds(&thresholds.radio_usage)
                .percent(),
        );
    }

    for (counter, field, unit) in RADIO_COUNTERS {
        if let Some(value) = radio.text(field) {
            report.metric(PerfData::new(format!("Interface {label} - {counter}"), value).unit(unit));
        }
    }

    report.detail(format!("Interface {label}:"));
    for (key, value) in radio_info(radio) {
        report.detail(format!("  {key}: {value}"));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: &str, cpu: &str, radios: Vec<Record>) -> DeviceSnapshot {
        DeviceSnapshot {
            device: Record::new(".0.11.134.0.0.1")
                .with("ip", "10.0.0.1")
                .with("name", "ap-lobby")
                .with("status", status)
                .with("cpu_usage", cpu)
                .with(MEM_USAGE, 50.0),
            radios,
        }
    }

    fn radio(mac: &str, usage: i64) -> Record {
        Record::new(".0.11.134.0.0.1.1")
            .with("index", 1i64)
            .with("mac", mac)
            .with("usage", usage)
            .with("noise", -92i64)
    }

    #[test]
    fn healthy_ap_reports_metrics() {
        let report = evaluate(&snapshot("1", "50", Vec::new()), &Thresholds::default());
        assert_eq!(
            report.status_line(),
            "OK - AP ap-lobby is online and in optimal state | 'cpu'=50%;80;95;0;100 'mem'=50.0%;80;95;0;100"
        );
        assert_eq!(report.details()[0], "IP: 10.0.0.1");
    }

    #[test]
    fn offline_ap_is_critical() {
        let report = evaluate(&snapshot("2", "50", Vec::new()), &Thresholds::default());
        assert_eq!(report.severity(), Severity::Critical);
        assert_eq!(report.reasons(), ["AP ap-lobby is offline"]);
    }

    #[test]
    fn busy_radio_raises_warning_with_its_label() {
        let report = evaluate(
            &snapshot("1", "10", vec![radio("00:0b:86:00:00:10", 85)]),
            &Thresholds::default(),
        );
        assert_eq!(report.severity(), Severity::Warning);
        assert_eq!(
            report.reasons(),
            ["Interface 00:0b:86:00:00:10 radio usage >= 80%"]
        );
        let metrics: Vec<String> = report.perfdata().iter().map(PerfData::to_string).collect();
        assert!(metrics.contains(&"'Interface 00:0b:86:00:00:10 - Usage'=85%;80;95;0;100".to_string()));
        assert!(metrics.contains(&"'Interface 00:0b:86:00:00:10 - Noise'=-92dBm;;;;".to_string()));
        assert!(report.details().contains(&"Interface 00:0b:86:00:00:10:".to_string()));
        assert!(report.details().contains(&"  Noise: -92dBm".to_string()));
    }

    #[test]
    fn cpu_and_radio_severities_merge_upwards() {
        let report = evaluate(
            &snapshot("1", "96", vec![radio("00:0b:86:00:00:10", 85)]),
            &Thresholds::default(),
        );
        assert_eq!(report.severity(), Severity::Critical);
        assert_eq!(report.reasons().len(), 2);
    }
}
