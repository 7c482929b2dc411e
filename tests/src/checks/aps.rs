use arubacheck_common::config::Thresholds;
use arubacheck_common::record::Record;
use arubacheck_common::transport::TransportError;
use arubacheck_common::transport::memory::MemoryTransport;
use arubacheck_core::ProbeError;
use arubacheck_core::check::aps;
use arubacheck_core::derived::MEM_USAGE;
use arubacheck_core::poll::poll_devices;
use arubacheck_core::profile::INSTANT;
use arubacheck_core::report::Report;
use arubacheck_core::threshold::Severity;

use crate::support::{healthy_ap, insert_ap, set};

fn controller(aps: &[Vec<(&str, &str)>]) -> MemoryTransport {
    let mut transport = MemoryTransport::new();
    for (i, fields) in aps.iter().enumerate() {
        insert_ap(&mut transport, &INSTANT, i as u8 + 1, fields);
    }
    transport
}

fn run(transport: &mut MemoryTransport) -> Report {
    aps::check(transport, &INSTANT, &Thresholds::default()).unwrap()
}

#[test]
fn healthy_ap_is_ok_with_half_memory_free() {
    let mut transport = controller(&[healthy_ap("10.0.0.1", "ap-1")]);

    let devices: Vec<Record> = poll_devices(&mut transport, &INSTANT).unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].number(MEM_USAGE), Some(50.0));

    let report = run(&mut transport);
    assert_eq!(report.severity(), Severity::Ok);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        report.status_line(),
        "OK - All 1 APs are online and in optimal state | 'aps'=1;;;0; 'offline_aps'=0;;;0;1"
    );
}

#[test]
fn offline_ap_is_critical_whatever_its_metrics() {
    let mut transport = controller(&[set(healthy_ap("10.0.0.1", "ap-1"), "status", "0")]);

    let report = run(&mut transport);
    assert_eq!(report.severity(), Severity::Critical);
    assert_eq!(report.exit_code(), 2);
    assert!(report.reasons().iter().any(|reason| reason.contains("offline")));
    assert_eq!(report.details()[0], "Offline APs:");
}

#[test]
fn cpu_usage_crosses_warning_then_critical() {
    for (cpu, expected) in [("96", Severity::Critical), ("85", Severity::Warning), ("50", Severity::Ok)] {
        let mut transport = controller(&[set(healthy_ap("10.0.0.1", "ap-1"), "cpu_usage", cpu)]);
        assert_eq!(run(&mut transport).severity(), expected, "cpu_usage {cpu}");
    }
}

#[test]
fn one_warning_ap_in_two_names_that_ap() {
    let mut transport = controller(&[
        healthy_ap("10.0.0.1", "ap-1"),
        set(healthy_ap("10.0.0.2", "ap-2"), "cpu_usage", "85"),
    ]);

    let report = run(&mut transport);
    assert_eq!(report.severity(), Severity::Warning);
    assert_eq!(
        report.reasons(),
        ["1 APs with warning CPU usage (>=80%): ap-2"]
    );
    assert!(report.status_line().contains("'aps'=2;;;0;"));
}

#[test]
fn unreachable_controller_is_unknown_without_detail() {
    let mut transport = controller(&[healthy_ap("10.0.0.1", "ap-1")]).unreachable();

    let err = aps::check(&mut transport, &INSTANT, &Thresholds::default()).unwrap_err();
    assert_eq!(err, ProbeError::Timeout);

    let report: Report = aps::run(&mut transport, &INSTANT, &Thresholds::default());
    assert_eq!(
        report.to_string(),
        "UNKNOWN - Aruba virtual controller not reachable via SNMP"
    );
    assert_eq!(report.exit_code(), 3);
    assert!(report.details().is_empty());
    assert!(report.perfdata().is_empty());
}

#[test]
fn healthy_controller_runs_to_a_verdict() {
    let mut transport = controller(&[healthy_ap("10.0.0.1", "ap-1")]);
    let report: Report = aps::run(&mut transport, &INSTANT, &Thresholds::default());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.details().len(), 1);
}

#[test]
fn timeout_mid_reconstruction_aborts_the_whole_run() {
    let cpu_column: &str = INSTANT.device.address("cpu_usage").unwrap();
    let mut transport = controller(&[healthy_ap("10.0.0.1", "ap-1"), healthy_ap("10.0.0.2", "ap-2")])
        .fail_below(cpu_column, TransportError::Timeout);

    assert_eq!(
        aps::check(&mut transport, &INSTANT, &Thresholds::default()).unwrap_err(),
        ProbeError::Timeout
    );
}

#[test]
fn missing_optional_columns_are_tolerated() {
    let mut transport = controller(&[vec![("ip", "10.0.0.1"), ("status", "1")]]);

    let devices: Vec<Record> = poll_devices(&mut transport, &INSTANT).unwrap();
    assert!(!devices[0].contains("cpu_usage"));
    assert_eq!(devices[0].number(MEM_USAGE), Some(0.0));
    assert_eq!(run(&mut transport).severity(), Severity::Ok);
}
