//! # Shared Models
//!
//! Types shared by every layer of the probe:
//!
//! * **[`config`]**: the immutable run configuration built once by the CLI.
//! * **[`record`]**: entity records and their field values.
//! * **[`transport`]**: the seam to the device-management protocol.

pub mod config;
pub mod record;
pub mod transport;
