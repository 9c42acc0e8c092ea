//! Column value types for fetched rows.

use bytes::Bytes;
use std::fmt;

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// NULL value.
    Null,
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    /// Character data (CHAR, VARCHAR).
    String(String),
    /// Binary large object.
    Blob(Bytes),
    /// Payload of a type without a portable mapping (decimal, temporal,
    /// bit, enum, set, geometry), exactly as fetched.
    Raw(Bytes),
}

impl ColumnValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ColumnValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert an integer value to i64.
    ///
    /// Returns `None` for unsigned 64-bit values that do not fit.
    pub fn to_i64(&self) -> Option<i64> {
        match *self {
            ColumnValue::Int8(v) => Some(v.into()),
            ColumnValue::UInt8(v) => Some(v.into()),
            ColumnValue::Int16(v) => Some(v.into()),
            ColumnValue::UInt16(v) => Some(v.into()),
            ColumnValue::Int32(v) => Some(v.into()),
            ColumnValue::UInt32(v) => Some(v.into()),
            ColumnValue::Int64(v) => Some(v),
            ColumnValue::UInt64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Try to convert a numeric value to f64.
    pub fn to_f64(&self) -> Option<f64> {
        match *self {
            ColumnValue::Float(v) => Some(v.into()),
            ColumnValue::Double(v) => Some(v),
            _ => self.to_i64().map(|v| v as f64),
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ColumnValue::Blob(bytes) | ColumnValue::Raw(bytes) => Some(bytes),
            ColumnValue::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Null => write!(f, "NULL"),
            ColumnValue::Int8(v) => write!(f, "{}", v),
            ColumnValue::UInt8(v) => write!(f, "{}", v),
            ColumnValue::Int16(v) => write!(f, "{}", v),
            ColumnValue::UInt16(v) => write!(f, "{}", v),
            ColumnValue::Int32(v) => write!(f, "{}", v),
            ColumnValue::UInt32(v) => write!(f, "{}", v),
            ColumnValue::Int64(v) => write!(f, "{}", v),
            ColumnValue::UInt64(v) => write!(f, "{}", v),
            ColumnValue::Float(v) => write!(f, "{}", v),
            ColumnValue::Double(v) => write!(f, "{}", v),
            ColumnValue::String(s) => write!(f, "{}", s),
            ColumnValue::Blob(bytes) => write!(f, "<BLOB: {} bytes>", bytes.len()),
            ColumnValue::Raw(bytes) => write!(f, "<RAW: {} bytes>", bytes.len()),
        }
    }
}
