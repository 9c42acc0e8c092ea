//! Portable column data types and the wire type mapping.
//!
//! Both functions here are total over the recognized wire types. The only
//! failure is `column_size` on a type code outside `FieldType`.

use crate::error::{Error, Result};

use super::field::FieldDescriptor;
use super::field_type::FieldType;

/// Driver-agnostic column data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnDataType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
    Blob,
    /// Decimal, temporal, bit, enum, set, geometry, null and any other
    /// type fetched as opaque bytes.
    Unknown,
}

impl ColumnDataType {
    /// Classify a wire field.
    ///
    /// Integer types honor the unsigned flag. Unrecognized codes classify
    /// as `Unknown`.
    pub fn from_field(field: &FieldDescriptor) -> Self {
        let unsigned = field.is_unsigned();
        let Some(field_type) = field.field_type() else {
            return ColumnDataType::Unknown;
        };

        match field_type {
            FieldType::Tiny if unsigned => ColumnDataType::UInt8,
            FieldType::Tiny => ColumnDataType::Int8,
            FieldType::Short if unsigned => ColumnDataType::UInt16,
            FieldType::Short => ColumnDataType::Int16,
            FieldType::Int24 | FieldType::Long if unsigned => ColumnDataType::UInt32,
            FieldType::Int24 | FieldType::Long => ColumnDataType::Int32,
            FieldType::LongLong if unsigned => ColumnDataType::UInt64,
            FieldType::LongLong => ColumnDataType::Int64,
            FieldType::Float => ColumnDataType::Float,
            FieldType::Double => ColumnDataType::Double,
            FieldType::String | FieldType::VarString => ColumnDataType::String,
            FieldType::TinyBlob
            | FieldType::MediumBlob
            | FieldType::LongBlob
            | FieldType::Blob => ColumnDataType::Blob,
            FieldType::Decimal
            | FieldType::NewDecimal
            | FieldType::Null
            | FieldType::Timestamp
            | FieldType::Date
            | FieldType::Time
            | FieldType::DateTime
            | FieldType::Year
            | FieldType::NewDate
            | FieldType::Varchar
            | FieldType::Bit
            | FieldType::Timestamp2
            | FieldType::DateTime2
            | FieldType::Time2
            | FieldType::Json
            | FieldType::Enum
            | FieldType::Set
            | FieldType::Geometry => ColumnDataType::Unknown,
        }
    }

    /// Width in bytes for fixed-width numeric types.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            ColumnDataType::Int8 | ColumnDataType::UInt8 => Some(1),
            ColumnDataType::Int16 | ColumnDataType::UInt16 => Some(2),
            ColumnDataType::Int32 | ColumnDataType::UInt32 | ColumnDataType::Float => Some(4),
            ColumnDataType::Int64 | ColumnDataType::UInt64 | ColumnDataType::Double => Some(8),
            ColumnDataType::String | ColumnDataType::Blob | ColumnDataType::Unknown => None,
        }
    }
}

impl std::fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnDataType::Int8 => "INT8",
            ColumnDataType::UInt8 => "UINT8",
            ColumnDataType::Int16 => "INT16",
            ColumnDataType::UInt16 => "UINT16",
            ColumnDataType::Int32 => "INT32",
            ColumnDataType::UInt32 => "UINT32",
            ColumnDataType::Int64 => "INT64",
            ColumnDataType::UInt64 => "UINT64",
            ColumnDataType::Float => "FLOAT",
            ColumnDataType::Double => "DOUBLE",
            ColumnDataType::String => "STRING",
            ColumnDataType::Blob => "BLOB",
            ColumnDataType::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Storage size in bytes the fetch routine needs for a field.
///
/// Fixed-width numeric types use their native width; every other
/// recognized type uses the declared length verbatim.
///
/// Returns `Err(Error::Statement)` for an unrecognized wire type code.
pub fn column_size(field: &FieldDescriptor) -> Result<usize> {
    let field_type = field
        .field_type()
        .ok_or_else(|| Error::statement(format!("unknown field type {}", field.type_code)))?;

    match field_type.fixed_width() {
        Some(width) => Ok(width),
        None => usize::try_from(field.length).map_err(|_| {
            Error::statement(format!(
                "declared length {} of column '{}' exceeds addressable memory",
                field.length, field.name
            ))
        }),
    }
}
