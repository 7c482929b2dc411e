//! # Row Reconstructor
//!
//! Rebuilds table rows from independently addressed values in two phases:
//!
//! 1. **Enumerate**: walk the key column through [`rows::iterate`] to learn every
//!    row suffix.
//! 2. **Fan out**: for each row, query `template + suffix` for every other column
//!    the profile declares.
//!
//! A column the agent does not know for a row (`noSuchName`) is left out of that
//! record. A column the profile marks absent is never queried. Any other
//! transport failure aborts the whole reconstruction.

use arubacheck_common::record::{FieldValue, Record};
use arubacheck_common::transport::{Transport, TransportError};
use tracing::{debug, trace};

use crate::error::ProbeError;
use crate::normalize::normalize;
use crate::profile::ColumnMap;
use crate::rows::{self, Row};

pub struct Reconstructor<'t, T: Transport + ?Sized> {
    transport: &'t mut T,
}

impl<'t, T: Transport + ?Sized> Reconstructor<'t, T> {
    pub fn new(transport: &'t mut T) -> Self {
        Self { transport }
    }

    /// One record per row discovered under the key column of `map`.
    pub fn reconstruct(&mut self, map: &ColumnMap, key_field: &str) -> Result<Vec<Record>, ProbeError> {
        self.reconstruct_where(map, key_field, |_| true)
    }

    /// Like [`Reconstructor::reconstruct`], restricted to rows whose suffix `accept`s.
    /// Rejected rows cost no point-queries.
    pub fn reconstruct_where<F>(
        &mut self,
        map: &ColumnMap,
        key_field: &str,
        accept: F,
    ) -> Result<Vec<Record>, ProbeError>
    where
        F: Fn(&str) -> bool,
    {
        let key_address: &str = key_address(map, key_field)?;
        let mut records: Vec<Record> = Vec::new();

        for Row { suffix, value } in rows::iterate(&mut *self.transport, key_address)? {
            if !accept(&suffix) {
                trace!("Row {suffix} filtered out");
                continue;
            }
            let key_value: FieldValue = normalize(key_field, value);
            records.push(self.reconstruct_row(map, key_field, &suffix, key_value)?);
        }

        debug!("Reconstructed {} rows keyed by {key_field}", records.len());
        Ok(records)
    }

    /// Walks only the key column: `(suffix, normalized key value)` per row.
    pub fn key_index(
        &mut self,
        map: &ColumnMap,
        key_field: &str,
    ) -> Result<Vec<(String, FieldValue)>, ProbeError> {
        let key_address: &str = key_address(map, key_field)?;
        Ok(rows::iterate(&mut *self.transport, key_address)?
            .map(|row| (row.suffix, normalize(key_field, row.value)))
            .collect())
    }

    /// The single row whose key value reads as `wanted`.
    ///
    /// Zero matches is [`ProbeError::DeviceNotFound`], several is
    /// [`ProbeError::AmbiguousResult`]; neither picks a row silently.
    pub fn reconstruct_one(
        &mut self,
        map: &ColumnMap,
        key_field: &str,
        wanted: &str,
    ) -> Result<Record, ProbeError> {
        let mut matches: Vec<(String, FieldValue)> = self
            .key_index(map, key_field)?
            .into_iter()
            .filter(|(_, value)| value.to_string() == wanted)
            .collect();

        match matches.len() {
            0 => Err(ProbeError::DeviceNotFound(wanted.to_string())),
            1 => {
                let (suffix, key_value) = matches.remove(0);
                self.reconstruct_row(map, key_field, &suffix, key_value)
            }
            count => Err(ProbeError::AmbiguousResult {
                filter: wanted.to_string(),
                count,
            }),
        }
    }

    /// Fills one record for an already discovered row.
    pub fn reconstruct_row(
        &mut self,
        map: &ColumnMap,
        key_field: &str,
        suffix: &str,
        key_value: FieldValue,
    ) -> Result<Record, ProbeError> {
        let mut record: Record = Record::new(suffix).with(key_field, key_value);

        for column in map.columns().filter(|column| column.field != key_field) {
            let Some(template) = column.address else {
                continue;
            };
            let address: String = format!("{template}{suffix}");

            match self.transport.get(&address) {
                Ok(raw) => record.insert(column.field, normalize(column.field, raw)),
                Err(TransportError::NoSuchName(_)) => {
                    trace!("{} not available for row {suffix}", column.field);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(record)
    }
}

fn key_address(map: &ColumnMap, key_field: &str) -> Result<&'static str, ProbeError> {
    map.address(key_field)
        .ok_or_else(|| ProbeError::MissingKeyColumn(key_field.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
