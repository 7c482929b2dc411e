//! An agent held entirely in memory.
//!
//! Values are kept in numeric address order so walks come back the way a real
//! agent would return them. Failures can be injected per subtree to exercise
//! the timeout and protocol-error paths without a device.

use std::collections::BTreeMap;

use tracing::warn;

use super::{RawValue, Transport, TransportError, Varbind, is_below, parse_address};

#[derive(Debug, Default)]
pub struct MemoryTransport {
    values: BTreeMap<Vec<u64>, (String, RawValue)>,
    failures: Vec<(String, TransportError)>,
    requests: usize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` at `address`. Non-numeric addresses are ignored.
    pub fn insert(&mut self, address: &str, value: impl Into<RawValue>) {
        match parse_address(address) {
            Ok(key) => {
                self.values.insert(key, (address.to_string(), value.into()));
            }
            Err(e) => warn!("Ignoring fixture value: {e}"),
        }
    }

    pub fn with(mut self, address: &str, value: impl Into<RawValue>) -> Self {
        self.insert(address, value);
        self
    }

    /// Every request touching `prefix` (or anything below it) fails with `error`.
    pub fn fail_below(mut self, prefix: &str, error: TransportError) -> Self {
        self.failures.push((prefix.to_string(), error));
        self
    }

    /// Every request times out, as if the agent were unreachable.
    pub fn unreachable(self) -> Self {
        self.fail_below("", TransportError::Timeout)
    }

    /// Number of walks and gets served so far.
    pub fn requests(&self) -> usize {
        self.requests
    }

    fn injected_failure(&self, address: &str) -> Option<TransportError> {
        self.failures
            .iter()
            .find(|(prefix, _)| prefix.is_empty() || address == prefix || is_below(address, prefix))
            .map(|(_, error)| error.clone())
    }
}

impl Transport for MemoryTransport {
    fn walk(&mut self, prefix: &str) -> Result<Vec<Varbind>, TransportError> {
        self.requests += 1;
        if let Some(error) = self.injected_failure(prefix) {
            return Err(error);
        }
        parse_address(prefix)?;

        Ok(self
            .values
            .values()
            .filter(|(address, _)| is_below(address, prefix))
            .map(|(address, value)| Varbind::new(address.clone(), value.clone()))
            .collect())
    }

    fn get(&mut self, address: &str) -> Result<RawValue, TransportError> {
        self.requests += 1;
        if let Some(error) = self.injected_failure(address) {
            return Err(error);
        }
        let key: Vec<u64> = parse_address(address)?;

        self.values
            .get(&key)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| TransportError::NoSuchName(address.to_string()))
    }
}
