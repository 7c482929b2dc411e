//! # Value Normalization
//!
//! Octet strings carry both human-readable text (names, serials) and binary
//! data (hardware addresses) with nothing in the protocol to tell them apart.
//! A value made only of printable ASCII is kept as text; anything else is
//! rendered as lowercase hex, and as colon-separated octets for 6-byte MAC fields.

use std::net::Ipv4Addr;

use arubacheck_common::record::FieldValue;
use arubacheck_common::transport::RawValue;
use pnet::util::MacAddr;

/// Turns a raw protocol value into a record field. `field` only matters for
/// MAC re-punctuation.
pub fn normalize(field: &str, raw: RawValue) -> FieldValue {
    match raw {
        RawValue::OctetString(bytes) => normalize_octets(field, &bytes),
        RawValue::Integer(n) => FieldValue::Integer(n),
        RawValue::Unsigned(n) => match i64::try_from(n) {
            Ok(n) => FieldValue::Integer(n),
            Err(_) => FieldValue::Text(n.to_string()),
        },
        RawValue::Timeticks(ticks) => FieldValue::Integer(i64::from(ticks)),
        RawValue::IpAddress(octets) => FieldValue::Text(Ipv4Addr::from(octets).to_string()),
        RawValue::ObjectId(oid) => FieldValue::Text(oid),
        RawValue::Null => FieldValue::Text(String::new()),
    }
}

fn normalize_octets(field: &str, bytes: &[u8]) -> FieldValue {
    let printable: String = bytes
        .iter()
        .filter(|byte| is_printable(**byte))
        .map(|byte| char::from(*byte))
        .collect();

    if printable.len() == bytes.len() {
        return FieldValue::Text(printable);
    }

    if is_mac_field(field) {
        if let Some(mac) = format_mac(bytes) {
            return FieldValue::Text(mac);
        }
    }
    FieldValue::Text(hex(bytes))
}

/// Printable ASCII, whitespace included.
pub fn is_printable(byte: u8) -> bool {
    byte.is_ascii_graphic() || matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn is_mac_field(field: &str) -> bool {
    field == "mac" || field.ends_with("_mac")
}

fn format_mac(bytes: &[u8]) -> Option<String> {
    match bytes {
        [a, b, c, d, e, f] => Some(MacAddr::new(*a, *b, *c, *d, *e, *f).to_string()),
        _ => None,
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
