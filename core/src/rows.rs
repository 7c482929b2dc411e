//! # Row Iterator
//!
//! The protocol has no row abstraction. Rows are discovered by walking the
//! subtree of one *key* column: every address found below it names one entity,
//! and the part after the key address (the row suffix) is what the other
//! columns of that entity share.

use arubacheck_common::transport::{RawValue, Transport, TransportError, Varbind};
use tracing::{debug, warn};

/// One discovered entity: its row suffix and the raw value of the key column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Starts with a dot, e.g. `.0.11.134.1.2.3`.
    pub suffix: String,
    pub value: RawValue,
}

/// Rows yielded in agent order from a single walk. A new walk is needed to
/// observe the table again.
#[derive(Debug)]
pub struct Rows {
    key_address: String,
    varbinds: std::vec::IntoIter<Varbind>,
}

impl Rows {
    fn new(key_address: &str, varbinds: Vec<Varbind>) -> Self {
        Self {
            key_address: key_address.to_string(),
            varbinds: varbinds.into_iter(),
        }
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let varbind: Varbind = self.varbinds.next()?;
            match row_suffix(&varbind.address, &self.key_address) {
                Some(suffix) => {
                    return Some(Row {
                        suffix: suffix.to_string(),
                        value: varbind.value,
                    });
                }
                None => warn!(
                    "Skipping {} outside of key column {}",
                    varbind.address, self.key_address
                ),
            }
        }
    }
}

/// Walks `key_address` and yields one [`Row`] per entity found below it.
///
/// A timeout from the walk is returned as is.
pub fn iterate<T>(transport: &mut T, key_address: &str) -> Result<Rows, TransportError>
where
    T: Transport + ?Sized,
{
    let varbinds: Vec<Varbind> = transport.walk(key_address)?;
    debug!("Discovered {} rows below {key_address}", varbinds.len());
    Ok(Rows::new(key_address, varbinds))
}

/// Remainder of `address` after `prefix`, dot included.
pub fn row_suffix<'a>(address: &'a str, prefix: &str) -> Option<&'a str> {
    address
        .strip_prefix(prefix)
        .filter(|rest| rest.starts_with('.') && rest.len() > 1)
}
