use arubacheck_common::transport::memory::MemoryTransport;
use arubacheck_core::profile::{ColumnMap, Profile};

/// Row suffix of the AP whose MAC is `00:0b:86:00:00:<last>`.
pub fn ap_suffix(last: u8) -> String {
    format!(".0.11.134.0.0.{last}")
}

/// Stores one table row: each `(field, value)` lands at the field's column
/// address plus `suffix`. Fields the map marks absent are skipped.
pub fn insert_row(
    transport: &mut MemoryTransport,
    map: &ColumnMap,
    suffix: &str,
    fields: &[(&str, &str)],
) {
    for (field, value) in fields {
        if let Some(column) = map.address(field) {
            transport.insert(&format!("{column}{suffix}"), *value);
        }
    }
}

pub fn insert_ap(
    transport: &mut MemoryTransport,
    profile: &Profile,
    last: u8,
    fields: &[(&str, &str)],
) {
    insert_row(transport, &profile.device, &ap_suffix(last), fields);
}

pub fn insert_radio(
    transport: &mut MemoryTransport,
    profile: &Profile,
    ap: u8,
    index: u8,
    fields: &[(&str, &str)],
) {
    let suffix: String = format!("{}.{index}", ap_suffix(ap));
    let index: String = index.to_string();
    let mut fields: Vec<(&str, &str)> = fields.to_vec();
    fields.push(("index", &index));
    insert_row(transport, &profile.radio, &suffix, &fields);
}

/// A healthy AP: online, 50% CPU, 50% free memory.
pub fn healthy_ap<'a>(ip: &'a str, name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("ip", ip),
        ("name", name),
        ("status", "1"),
        ("cpu_usage", "50"),
        ("free_mem", "500"),
        ("total_mem", "1000"),
    ]
}

/// Replaces (or adds) `field` in a fixture row.
pub fn set<'a>(mut fields: Vec<(&'a str, &'a str)>, field: &'a str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    fields.retain(|(name, _)| *name != field);
    fields.push((field, value));
    fields
}
