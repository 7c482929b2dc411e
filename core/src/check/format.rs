//! Human-readable rendering of AP and radio records for detail lines.

use arubacheck_common::record::Record;

use crate::derived::{FREE_MEM, MEM_USAGE, TOTAL_MEM};

const SIZE_UNITS: [&str; 8] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB"];

/// Binary-prefixed size, e.g. `1.5MiB`. `input_unit` names the unit `num` is in.
pub fn format_size(num: f64, input_unit: &str) -> String {
    let start: usize = SIZE_UNITS
        .iter()
        .position(|unit| *unit == input_unit)
        .unwrap_or(0);

    let mut num: f64 = num;
    for unit in &SIZE_UNITS[start..] {
        if num.abs() < 1024.0 {
            return format!("{num:.1}{unit}");
        }
        num /= 1024.0;
    }
    format!("{num:.1}YiB")
}

/// Uptime from hundredths of a second, e.g. `3 days, 4:05:06`.
pub fn format_uptime(ticks: f64) -> String {
    let total: u64 = (ticks.max(0.0) / 100.0) as u64;
    let (days, rest) = (total / 86_400, total % 86_400);
    let clock: String = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

/// Name to show for an AP: its name, else its IP, else its row suffix.
pub fn display_name(ap: &Record) -> String {
    ap.text("name")
        .filter(|name| !name.is_empty())
        .or_else(|| ap.text("ip"))
        .unwrap_or_else(|| ap.suffix().to_string())
}

/// Name to show for a radio interface: its MAC when known, else its index.
pub fn radio_label(radio: &Record) -> String {
    match (radio.text("mac"), radio.text("index")) {
        (Some(mac), _) if !mac.is_empty() => mac,
        (_, Some(index)) => format!("radio {index}"),
        _ => format!("radio {}", radio.suffix()),
    }
}

pub fn ap_info(ap: &Record) -> Vec<(&'static str, String)> {
    let mut info: Vec<(&'static str, String)> = Vec::new();

    for (field, label) in [("ip", "IP"), ("mac", "MAC"), ("model", "Model"), ("serial", "Serial ID")] {
        if let Some(value) = ap.text(field) {
            info.push((label, value));
        }
    }
    if let Some(cpu) = ap.text("cpu_usage") {
        info.push(("CPU", format!("{cpu}%")));
    }
    if let Some(free_pct) = ap.number(MEM_USAGE) {
        let mut memory: String = format!("{free_pct:.1}%");
        if let (Some(free), Some(total)) = (ap.number(FREE_MEM), ap.number(TOTAL_MEM)) {
            memory.push_str(&format!(" ({}/{})", format_size(free, "B"), format_size(total, "B")));
        }
        info.push(("Free memory", memory));
    }
    if let Some(ticks) = ap.number("uptime") {
        info.push(("Uptime", format_uptime(ticks)));
    }
    info
}

/// `ap-1 (IP: 10.0.0.1, CPU: 50%, ...)`
pub fn ap_summary(ap: &Record) -> String {
    let info: Vec<String> = ap_info(ap)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    format!("{} ({})", display_name(ap), info.join(", "))
}

pub fn radio_info(radio: &Record) -> Vec<(&'static str, String)> {
    let mut info: Vec<(&'static str, String)> = Vec::new();

    if let Some(ssid) = radio.text("ssid") {
        info.push(("SSID", ssid));
    }
    if let Some(channel) = radio.text("channel") {
        info.push(("Channel", channel));
    }
    if let Some(usage) = radio.text("usage") {
        info.push(("Usage", format!("{usage}%")));
    }
    if let Some(status) = radio.text("status") {
        info.push(("Status", status));
    }
    if let Some(noise) = radio.text("noise") {
        info.push(("Noise", format!("{noise}dBm")));
    }
    if let Some(tx) = traffic(radio, "tx", "drops", "tx_dropped_frames") {
        info.push(("TX", tx));
    }
    if let Some(rx) = traffic(radio, "rx", "bad", "rx_bad_frames") {
        info.push(("RX", rx));
    }
    if let Some(events) = radio.text("phy_events") {
        info.push(("Physical events", events));
    }
    if let Some(clients) = radio.text("clients_count") {
        info.push(("Clients", clients));
    }
    info
}

/// `1200 frames (3.4MiB drops: 2 frames)`; byte counters are in KiB.
fn traffic(radio: &Record, direction: &str, error_label: &str, error_field: &str) -> Option<String> {
    let frames: String = radio.text(&format!("{direction}_total_frames"))?;
    let mut extra: Vec<String> = Vec::new();

    if let Some(bytes) = radio.number(&format!("{direction}_total_bytes")) {
        extra.push(format_size(bytes, "KiB"));
    }
    if let Some(errors) = radio.text(error_field) {
        extra.push(format!("{error_label}: {errors} frames"));
    }

    if extra.is_empty() {
        Some(format!("{frames} frames"))
    } else {
        Some(format!("{frames} frames ({})", extra.join(" ")))
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
