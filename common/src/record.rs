//! # Entity Records
//!
//! One record per discovered table row (an access point or one of its radio
//! interfaces). Fields are only present when the device answered for them.

use std::collections::BTreeMap;
use std::fmt;

/// A normalized field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    /// Numeric view of the value. Text is parsed, so `"50"` reads as `50.0`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(f) => Some(*f),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

/// Field name to value, plus the row suffix the record was rebuilt from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    suffix: String,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Address suffix shared by every column of this row (e.g. `.0.11.134.1.2.3`).
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(FieldValue::to_string)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_read_as_numbers() {
        let record = Record::new(".1").with("cpu_usage", "50").with("name", "ap-1");
        assert_eq!(record.number("cpu_usage"), Some(50.0));
        assert_eq!(record.number("name"), None);
        assert_eq!(record.number("missing"), None);
    }

    #[test]
    fn display_matches_wire_text() {
        assert_eq!(FieldValue::Integer(1).to_string(), "1");
        assert_eq!(FieldValue::from("1").to_string(), "1");
        assert_eq!(FieldValue::Float(50.0).to_string(), "50");
    }

    #[test]
    fn absent_fields_are_not_contained() {
        let record = Record::new(".1").with("ip", "10.0.0.1");
        assert!(record.contains("ip"));
        assert!(!record.contains("serial"));
        assert_eq!(record.suffix(), ".1");
    }
}
