use arubacheck_common::config::Thresholds;
use arubacheck_common::record::Record;
use arubacheck_common::transport::memory::MemoryTransport;
use arubacheck_core::ProbeError;
use arubacheck_core::check::aps;
use arubacheck_core::derived::MEM_USAGE;
use arubacheck_core::poll::poll_devices;
use arubacheck_core::profile::{self, INSTANT, WLSX};
use arubacheck_core::threshold::Severity;

use crate::support::{healthy_ap, insert_ap};

#[test]
fn profile_names_resolve_case_insensitively() {
    assert_eq!(profile::resolve("WLSX").unwrap().name, "wlsx");
    assert!(matches!(
        profile::resolve("aos-cx"),
        Err(ProbeError::UnknownProfile { .. })
    ));
}

#[test]
fn wlsx_never_reports_fields_it_does_not_map() {
    let mut transport = MemoryTransport::new();
    for last in 1..=3 {
        let ip: String = format!("10.0.1.{last}");
        let name: String = format!("ap-{last}");
        insert_ap(&mut transport, &WLSX, last, &healthy_ap(&ip, &name));
    }

    let devices: Vec<Record> = poll_devices(&mut transport, &WLSX).unwrap();
    assert_eq!(devices.len(), 3);
    for device in &devices {
        assert!(!device.contains("cpu_usage"));
        assert!(!device.contains("free_mem"));
        assert!(!device.contains("total_mem"));
        assert_eq!(device.number(MEM_USAGE), Some(0.0));
        assert!(device.contains("name"));
    }

    let report = aps::check(&mut transport, &WLSX, &Thresholds::default()).unwrap();
    assert_eq!(report.severity(), Severity::Ok);
}

#[test]
fn empty_table_yields_no_records() {
    let mut transport = MemoryTransport::new();
    assert!(poll_devices(&mut transport, &INSTANT).unwrap().is_empty());
}
