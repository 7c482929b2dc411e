//! # Transport Seam
//!
//! The probe consumes exactly two primitives from the device-management protocol:
//! a subtree **walk** and a single-value **get**. Concrete sessions live in the
//! `protocols` crate; [`memory::MemoryTransport`] stands in for a device in tests.
//!
//! Addresses are dotted numeric object identifiers without a leading dot
//! (e.g. `1.3.6.1.4.1.14823.2.3.3.1.2.1.1.3`).

use thiserror::Error;

pub mod memory;

/// A value as typed by the protocol, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    OctetString(Vec<u8>),
    Integer(i64),
    /// Counters, gauges and unsigned integers.
    Unsigned(u64),
    /// Hundredths of a second.
    Timeticks(u32),
    IpAddress([u8; 4]),
    ObjectId(String),
    Null,
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::OctetString(value.as_bytes().to_vec())
    }
}

impl From<&[u8]> for RawValue {
    fn from(value: &[u8]) -> Self {
        RawValue::OctetString(value.to_vec())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

/// One `(address, value)` pair returned by a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Varbind {
    pub address: String,
    pub value: RawValue,
}

impl Varbind {
    pub fn new(address: impl Into<String>, value: RawValue) -> Self {
        Self {
            address: address.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The address does not exist on the agent (`noSuchName`, `noSuchObject`
    /// or `noSuchInstance`). Callers may treat this as field absence.
    #[error("no such name: {0}")]
    NoSuchName(String),
    /// The agent did not answer within the configured window.
    #[error("request timed out")]
    Timeout,
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    #[error("cannot open session to {target}: {reason}")]
    Session { target: String, reason: String },
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Blocking access to one remote agent.
pub trait Transport {
    /// Every `(address, value)` strictly below `prefix`, in agent order.
    fn walk(&mut self, prefix: &str) -> Result<Vec<Varbind>, TransportError>;

    /// The value stored at exactly `address`.
    fn get(&mut self, address: &str) -> Result<RawValue, TransportError>;
}

/// Parses a dotted address into its numeric arcs. A leading dot is tolerated.
pub fn parse_address(address: &str) -> Result<Vec<u64>, TransportError> {
    address
        .trim()
        .trim_start_matches('.')
        .split('.')
        .map(|arc| arc.parse::<u64>())
        .collect::<Result<Vec<u64>, _>>()
        .map_err(|_| TransportError::InvalidAddress(address.to_string()))
}

/// `true` when `address` lies strictly below `prefix` in the tree.
pub fn is_below(address: &str, prefix: &str) -> bool {
    address
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1)
}
