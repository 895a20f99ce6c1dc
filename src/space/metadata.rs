//! Type-erased metadata values attached to spaces.
//!
//! Classifications declare open-ended metadata fields (fire rating, floor
//! covering, ...) that are not part of the typed attribute block. A space
//! stores at most one [`MetaValue`] per metadata key; absence is expressed by
//! the key being missing, never by a null-like variant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single metadata value of one of the supported scalar types.
///
/// Serializes as a bare JSON scalar (untagged); dates round-trip as ISO-8601
/// strings. Variant order matters for deserialization: date-shaped strings
/// are tried before plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Calendar date
    Date(NaiveDate),
    /// String value
    Text(String),
}

impl From<&str> for MetaValue {
    fn from(text: &str) -> Self {
        MetaValue::Text(text.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(text: String) -> Self {
        MetaValue::Text(text)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        MetaValue::Int(n)
    }
}

impl From<f64> for MetaValue {
    fn from(n: f64) -> Self {
        MetaValue::Float(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<NaiveDate> for MetaValue {
    fn from(date: NaiveDate) -> Self {
        MetaValue::Date(date)
    }
}
