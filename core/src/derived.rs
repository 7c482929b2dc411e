//! Fields computed after reconstruction.
//!
//! `mem_usage` is the percentage of **free** memory (`free * 100 / total`), not
//! of used memory. A high value means a healthy AP. It is still compared
//! against the memory thresholds with the usual "higher is worse" rule, and
//! profiles without memory columns always report 0.

use arubacheck_common::record::Record;

pub const MEM_USAGE: &str = "mem_usage";
pub const FREE_MEM: &str = "free_mem";
pub const TOTAL_MEM: &str = "total_mem";

/// `free * 100 / total`, or 0 when either side is missing, `total` is not
/// positive or `free` is negative.
pub fn memory_usage(free: Option<f64>, total: Option<f64>) -> f64 {
    match (free, total) {
        (Some(free), Some(total)) if total > 0.0 && free >= 0.0 => free * 100.0 / total,
        _ => 0.0,
    }
}

/// Adds `mem_usage` to `record`. Always present afterwards.
pub fn with_memory_usage(mut record: Record) -> Record {
    let usage: f64 = memory_usage(record.number(FREE_MEM), record.number(TOTAL_MEM));
    record.insert(MEM_USAGE, usage);
    record
}
