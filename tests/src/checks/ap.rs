use arubacheck_common::config::Thresholds;
use arubacheck_common::record::Record;
use arubacheck_common::transport::TransportError;
use arubacheck_common::transport::memory::MemoryTransport;
use arubacheck_core::ProbeError;
use arubacheck_core::check::ap;
use arubacheck_core::poll::{find_device, poll_radios};
use arubacheck_core::profile::INSTANT;
use arubacheck_core::report::Report;
use arubacheck_core::threshold::Severity;

use crate::support::{healthy_ap, insert_ap, insert_radio, set};

const RADIO_MAC_1: &str = "00:0b:86:00:01:10";
const RADIO_MAC_2: &str = "00:0b:86:00:01:20";

/// Two APs; the first carries two radios, the second one.
fn controller() -> MemoryTransport {
    let mut transport = MemoryTransport::new();
    insert_ap(&mut transport, &INSTANT, 1, &healthy_ap("10.0.0.1", "ap-1"));
    insert_ap(&mut transport, &INSTANT, 2, &healthy_ap("10.0.0.2", "ap-2"));

    insert_radio(
        &mut transport,
        &INSTANT,
        1,
        1,
        &[("mac", RADIO_MAC_1), ("usage", "20"), ("noise", "-95"), ("status", "1")],
    );
    insert_radio(
        &mut transport,
        &INSTANT,
        1,
        2,
        &[("mac", RADIO_MAC_2), ("usage", "40"), ("clients_count", "7")],
    );
    insert_radio(&mut transport, &INSTANT, 2, 1, &[("usage", "99")]);
    transport
}

fn run(transport: &mut MemoryTransport, address: &str) -> Report {
    ap::run(transport, &INSTANT, &Thresholds::default(), address)
}

#[test]
fn only_the_matching_aps_radios_are_polled() {
    let mut transport = controller();

    let device: Record = find_device(&mut transport, &INSTANT, "10.0.0.1").unwrap();
    assert_eq!(device.text("name").as_deref(), Some("ap-1"));

    let radios: Vec<Record> = poll_radios(&mut transport, &INSTANT, &device).unwrap();
    assert_eq!(radios.len(), 2);
    assert!(radios.iter().all(|radio| radio.suffix().starts_with(".0.11.134.0.0.1.")));
}

#[test]
fn healthy_ap_with_radios_is_ok() {
    let report = run(&mut controller(), "10.0.0.1");
    assert_eq!(report.severity(), Severity::Ok);
    assert!(
        report
            .status_line()
            .starts_with("OK - AP ap-1 is online and in optimal state | 'cpu'=50%;80;95;0;100 'mem'=50.0%;80;95;0;100")
    );
    assert!(report.details().contains(&format!("Interface {RADIO_MAC_1}:")));
    assert!(report.details().contains(&format!("Interface {RADIO_MAC_2}:")));
    assert!(report.details().contains(&"  Clients: 7".to_string()));
}

#[test]
fn busy_radio_on_the_other_ap_is_critical_there_only() {
    let report = run(&mut controller(), "10.0.0.2");
    assert_eq!(report.severity(), Severity::Critical);
    assert_eq!(report.reasons(), ["Interface radio 1 radio usage >= 95%"]);
}

#[test]
fn offline_ap_is_critical() {
    let mut transport = MemoryTransport::new();
    insert_ap(&mut transport, &INSTANT, 1, &set(healthy_ap("10.0.0.1", "ap-1"), "status", "2"));

    let report = run(&mut transport, "10.0.0.1");
    assert_eq!(report.exit_code(), 2);
    assert_eq!(report.reasons(), ["AP ap-1 is offline"]);
}

#[test]
fn unknown_address_is_not_found() {
    let mut transport = controller();

    let err = find_device(&mut transport, &INSTANT, "10.0.0.9").unwrap_err();
    assert_eq!(err, ProbeError::DeviceNotFound("10.0.0.9".to_string()));

    let report = run(&mut transport, "10.0.0.9");
    assert_eq!(report.to_string(), "UNKNOWN - no device matches '10.0.0.9'");
    assert_eq!(report.exit_code(), 3);
}

#[test]
fn duplicate_keys_are_ambiguous() {
    let mut transport = controller();
    insert_ap(&mut transport, &INSTANT, 3, &healthy_ap("10.0.0.1", "ap-1-clone"));

    let err = find_device(&mut transport, &INSTANT, "10.0.0.1").unwrap_err();
    assert_eq!(
        err,
        ProbeError::AmbiguousResult {
            filter: "10.0.0.1".to_string(),
            count: 2
        }
    );
    assert_eq!(run(&mut transport, "10.0.0.1").exit_code(), 3);
}

#[test]
fn unreachable_ap_is_unknown_without_detail() {
    let mut transport = controller().unreachable();

    let err = find_device(&mut transport, &INSTANT, "10.0.0.1").unwrap_err();
    assert_eq!(err, ProbeError::Timeout);

    let report = run(&mut transport, "10.0.0.1");
    assert_eq!(report.to_string(), "UNKNOWN - Aruba AP not reachable via SNMP");
    assert_eq!(report.exit_code(), 3);
    assert!(report.details().is_empty());
}

#[test]
fn radio_table_timeout_has_its_own_message() {
    let radio_index: &str = INSTANT.radio.address("index").unwrap();
    let mut transport = controller().fail_below(radio_index, TransportError::Timeout);

    let report = run(&mut transport, "10.0.0.1");
    assert_eq!(report.to_string(), "UNKNOWN - Failed to retrieve radio status via SNMP");
    assert_eq!(report.exit_code(), 3);
    assert!(report.details().is_empty());
}
