//! # Aruba Probe Core
//!
//! Rebuilds access-point and radio tables out of a flat, one-value-per-address
//! protocol and turns them into a monitoring verdict.
//!
//! * **[`profile`]**: static column maps per hardware generation.
//! * **[`rows`]**: walks a key column and yields one row suffix per entity.
//! * **[`reconstruct`]**: fans out point-queries per row to assemble records.
//! * **[`normalize`]**: turns raw protocol values into record fields.
//! * **[`derived`]**: post-hoc fields such as `mem_usage`.
//! * **[`threshold`]**: severity classification and aggregation.
//! * **[`poll`]**: one full poll of a device or a controller.
//! * **[`check`]**: the all-APs and single-AP checks.
//! * **[`report`]**: status line, metrics block and detail lines.

pub mod check;
pub mod derived;
pub mod error;
pub mod normalize;
pub mod poll;
pub mod profile;
pub mod reconstruct;
pub mod report;
pub mod rows;
pub mod threshold;

pub use error::ProbeError;
