//! # Profile Registry
//!
//! Each supported hardware generation exposes its access-point and radio tables
//! at different addresses, and some columns not at all. A [`Profile`] captures
//! that as data: a device [`ColumnMap`] and a radio [`ColumnMap`] whose entries
//! are either an address template or absent. Nothing downstream branches on the
//! profile itself.

use crate::error::ProbeError;

pub const DEFAULT_PROFILE: &str = "instant";

/// One declared field and where to read it, if this profile has it at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub address: Option<&'static str>,
}

pub const fn column(field: &'static str, address: &'static str) -> Column {
    Column {
        field,
        address: Some(address),
    }
}

pub const fn absent(field: &'static str) -> Column {
    Column {
        field,
        address: None,
    }
}

/// Ordered field name to address template mapping.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    columns: &'static [Column],
}

impl ColumnMap {
    pub const fn new(columns: &'static [Column]) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> std::slice::Iter<'static, Column> {
        self.columns.iter()
    }

    /// Address template for `field`; `None` when undeclared or absent.
    pub fn address(&self, field: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|column| column.field == field)
            .and_then(|column| column.address)
    }
}

/// A named pair of column maps matching one firmware generation.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub description: &'static str,
    pub device: ColumnMap,
    pub device_key: &'static str,
    pub radio: ColumnMap,
    pub radio_key: &'static str,
}

const INSTANT_DEVICE: &[Column] = &[
    column("ip", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.3"),
    column("name", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.2"),
    column("mac", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.1"),
    column("serial", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.4"),
    column("model", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.6"),
    column("cpu_usage", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.7"),
    column("free_mem", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.8"),
    column("uptime", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.9"),
    column("total_mem", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.10"),
    column("status", "1.3.6.1.4.1.14823.2.3.3.1.2.1.1.11"),
];

const INSTANT_RADIO: &[Column] = &[
    column("index", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.2"),
    column("mac", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.3"),
    // ESSIDs live in the per-BSSID table, not the radio table.
    absent("ssid"),
    column("channel", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.4"),
    column("noise", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.6"),
    column("usage", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.7"),
    column("tx_total_frames", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.9"),
    column("tx_total_bytes", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.12"),
    column("tx_dropped_frames", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.13"),
    column("rx_total_frames", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.14"),
    column("rx_total_bytes", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.16"),
    column("rx_bad_frames", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.17"),
    column("phy_events", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.18"),
    column("status", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.19"),
    column("clients_count", "1.3.6.1.4.1.14823.2.3.3.1.2.2.1.20"),
];

const WLSX_DEVICE: &[Column] = &[
    column("ip", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.2"),
    column("name", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.3"),
    column("mac", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.1"),
    column("serial", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.6"),
    column("model", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.13"),
    absent("cpu_usage"),
    absent("free_mem"),
    column("uptime", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.12"),
    absent("total_mem"),
    column("status", "1.3.6.1.4.1.14823.2.2.1.5.2.1.4.1.19"),
];

const WLSX_RADIO: &[Column] = &[
    column("index", "1.3.6.1.4.1.14823.2.2.1.5.2.1.5.1.1"),
    absent("mac"),
    absent("ssid"),
    column("channel", "1.3.6.1.4.1.14823.2.2.1.5.2.1.5.1.3"),
    absent("noise"),
    column("usage", "1.3.6.1.4.1.14823.2.2.1.5.2.1.5.1.6"),
    absent("tx_total_frames"),
    absent("tx_total_bytes"),
    absent("tx_dropped_frames"),
    absent("rx_total_frames"),
    absent("rx_total_bytes"),
    absent("rx_bad_frames"),
    absent("phy_events"),
    absent("status"),
    column("clients_count", "1.3.6.1.4.1.14823.2.2.1.5.2.1.5.1.7"),
];

/// Aruba Instant virtual controllers (AI-AP-MIB). Both tables are indexed by
/// the AP MAC address; radios add the radio index after it.
pub static INSTANT: Profile = Profile {
    name: "instant",
    description: "Aruba Instant virtual controller (AI-AP-MIB)",
    device: ColumnMap::new(INSTANT_DEVICE),
    device_key: "ip",
    radio: ColumnMap::new(INSTANT_RADIO),
    radio_key: "index",
};

/// Campus controllers (WLSX-WLAN-MIB). No CPU, memory or frame counters.
pub static WLSX: Profile = Profile {
    name: "wlsx",
    description: "Aruba mobility controller (WLSX-WLAN-MIB)",
    device: ColumnMap::new(WLSX_DEVICE),
    device_key: "ip",
    radio: ColumnMap::new(WLSX_RADIO),
    radio_key: "index",
};

static REGISTRY: &[&Profile] = &[&INSTANT, &WLSX];

/// Looks a profile up by name, case-insensitively.
pub fn resolve(name: &str) -> Result<&'static Profile, ProbeError> {
    REGISTRY
        .iter()
        .copied()
        .find(|profile| profile.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ProbeError::UnknownProfile {
            name: name.to_string(),
            available: names().join(", "),
        })
}

pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|profile| profile.name).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
