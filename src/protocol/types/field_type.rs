//! MySQL wire field type enum.
//!
//! This is the closed set of `enum_field_types` codes the core recognizes.
//! Codes outside this set are rejected when sizing a column.

use crate::protocol::constants::*;

/// MySQL wire field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// DECIMAL (pre-5.0 packed decimal).
    Decimal,
    /// TINYINT - 8-bit integer.
    Tiny,
    /// SMALLINT - 16-bit integer.
    Short,
    /// INT - 32-bit integer.
    Long,
    /// FLOAT - single precision.
    Float,
    /// DOUBLE - double precision.
    Double,
    /// NULL column.
    Null,
    /// TIMESTAMP.
    Timestamp,
    /// BIGINT - 64-bit integer.
    LongLong,
    /// MEDIUMINT - 24-bit integer, fetched as 32-bit.
    Int24,
    /// DATE.
    Date,
    /// TIME.
    Time,
    /// DATETIME.
    DateTime,
    /// YEAR.
    Year,
    /// Internal DATE representation.
    NewDate,
    /// VARCHAR (internal, reported as VAR_STRING by the server).
    Varchar,
    /// BIT(n).
    Bit,
    /// TIMESTAMP with fractional seconds (internal).
    Timestamp2,
    /// DATETIME with fractional seconds (internal).
    DateTime2,
    /// TIME with fractional seconds (internal).
    Time2,
    /// JSON document.
    Json,
    /// DECIMAL / NUMERIC.
    NewDecimal,
    /// ENUM.
    Enum,
    /// SET.
    Set,
    /// TINYBLOB / TINYTEXT.
    TinyBlob,
    /// MEDIUMBLOB / MEDIUMTEXT.
    MediumBlob,
    /// LONGBLOB / LONGTEXT.
    LongBlob,
    /// BLOB / TEXT.
    Blob,
    /// VARCHAR / VARBINARY.
    VarString,
    /// CHAR / BINARY.
    String,
    /// Spatial types.
    Geometry,
}

impl FieldType {
    /// Parse a raw wire type code.
    ///
    /// Returns `None` for codes this core does not recognize.
    pub fn from_code(code: u32) -> Option<Self> {
        let field_type = match code {
            MYSQL_TYPE_DECIMAL => FieldType::Decimal,
            MYSQL_TYPE_TINY => FieldType::Tiny,
            MYSQL_TYPE_SHORT => FieldType::Short,
            MYSQL_TYPE_LONG => FieldType::Long,
            MYSQL_TYPE_FLOAT => FieldType::Float,
            MYSQL_TYPE_DOUBLE => FieldType::Double,
            MYSQL_TYPE_NULL => FieldType::Null,
            MYSQL_TYPE_TIMESTAMP => FieldType::Timestamp,
            MYSQL_TYPE_LONGLONG => FieldType::LongLong,
            MYSQL_TYPE_INT24 => FieldType::Int24,
            MYSQL_TYPE_DATE => FieldType::Date,
            MYSQL_TYPE_TIME => FieldType::Time,
            MYSQL_TYPE_DATETIME => FieldType::DateTime,
            MYSQL_TYPE_YEAR => FieldType::Year,
            MYSQL_TYPE_NEWDATE => FieldType::NewDate,
            MYSQL_TYPE_VARCHAR => FieldType::Varchar,
            MYSQL_TYPE_BIT => FieldType::Bit,
            MYSQL_TYPE_TIMESTAMP2 => FieldType::Timestamp2,
            MYSQL_TYPE_DATETIME2 => FieldType::DateTime2,
            MYSQL_TYPE_TIME2 => FieldType::Time2,
            MYSQL_TYPE_JSON => FieldType::Json,
            MYSQL_TYPE_NEWDECIMAL => FieldType::NewDecimal,
            MYSQL_TYPE_ENUM => FieldType::Enum,
            MYSQL_TYPE_SET => FieldType::Set,
            MYSQL_TYPE_TINY_BLOB => FieldType::TinyBlob,
            MYSQL_TYPE_MEDIUM_BLOB => FieldType::MediumBlob,
            MYSQL_TYPE_LONG_BLOB => FieldType::LongBlob,
            MYSQL_TYPE_BLOB => FieldType::Blob,
            MYSQL_TYPE_VAR_STRING => FieldType::VarString,
            MYSQL_TYPE_STRING => FieldType::String,
            MYSQL_TYPE_GEOMETRY => FieldType::Geometry,
            _ => return None,
        };
        Some(field_type)
    }

    /// Get the wire type code.
    pub fn code(&self) -> u32 {
        match self {
            FieldType::Decimal => MYSQL_TYPE_DECIMAL,
            FieldType::Tiny => MYSQL_TYPE_TINY,
            FieldType::Short => MYSQL_TYPE_SHORT,
            FieldType::Long => MYSQL_TYPE_LONG,
            FieldType::Float => MYSQL_TYPE_FLOAT,
            FieldType::Double => MYSQL_TYPE_DOUBLE,
            FieldType::Null => MYSQL_TYPE_NULL,
            FieldType::Timestamp => MYSQL_TYPE_TIMESTAMP,
            FieldType::LongLong => MYSQL_TYPE_LONGLONG,
            FieldType::Int24 => MYSQL_TYPE_INT24,
            FieldType::Date => MYSQL_TYPE_DATE,
            FieldType::Time => MYSQL_TYPE_TIME,
            FieldType::DateTime => MYSQL_TYPE_DATETIME,
            FieldType::Year => MYSQL_TYPE_YEAR,
            FieldType::NewDate => MYSQL_TYPE_NEWDATE,
            FieldType::Varchar => MYSQL_TYPE_VARCHAR,
            FieldType::Bit => MYSQL_TYPE_BIT,
            FieldType::Timestamp2 => MYSQL_TYPE_TIMESTAMP2,
            FieldType::DateTime2 => MYSQL_TYPE_DATETIME2,
            FieldType::Time2 => MYSQL_TYPE_TIME2,
            FieldType::Json => MYSQL_TYPE_JSON,
            FieldType::NewDecimal => MYSQL_TYPE_NEWDECIMAL,
            FieldType::Enum => MYSQL_TYPE_ENUM,
            FieldType::Set => MYSQL_TYPE_SET,
            FieldType::TinyBlob => MYSQL_TYPE_TINY_BLOB,
            FieldType::MediumBlob => MYSQL_TYPE_MEDIUM_BLOB,
            FieldType::LongBlob => MYSQL_TYPE_LONG_BLOB,
            FieldType::Blob => MYSQL_TYPE_BLOB,
            FieldType::VarString => MYSQL_TYPE_VAR_STRING,
            FieldType::String => MYSQL_TYPE_STRING,
            FieldType::Geometry => MYSQL_TYPE_GEOMETRY,
        }
    }

    /// Native width of the scalar the fetch routine writes, if this is a
    /// fixed-width numeric type.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            FieldType::Tiny => Some(1),
            FieldType::Short => Some(2),
            FieldType::Int24 | FieldType::Long => Some(4),
            FieldType::Float => Some(4),
            FieldType::Double => Some(8),
            FieldType::LongLong => Some(8),
            _ => None,
        }
    }

    /// Check if this is one of the four blob size classes.
    pub fn is_blob(&self) -> bool {
        matches!(
            self,
            FieldType::TinyBlob | FieldType::MediumBlob | FieldType::LongBlob | FieldType::Blob
        )
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::Decimal => "DECIMAL",
            FieldType::Tiny => "TINY",
            FieldType::Short => "SHORT",
            FieldType::Long => "LONG",
            FieldType::Float => "FLOAT",
            FieldType::Double => "DOUBLE",
            FieldType::Null => "NULL",
            FieldType::Timestamp => "TIMESTAMP",
            FieldType::LongLong => "LONGLONG",
            FieldType::Int24 => "INT24",
            FieldType::Date => "DATE",
            FieldType::Time => "TIME",
            FieldType::DateTime => "DATETIME",
            FieldType::Year => "YEAR",
            FieldType::NewDate => "NEWDATE",
            FieldType::Varchar => "VARCHAR",
            FieldType::Bit => "BIT",
            FieldType::Timestamp2 => "TIMESTAMP2",
            FieldType::DateTime2 => "DATETIME2",
            FieldType::Time2 => "TIME2",
            FieldType::Json => "JSON",
            FieldType::NewDecimal => "NEWDECIMAL",
            FieldType::Enum => "ENUM",
            FieldType::Set => "SET",
            FieldType::TinyBlob => "TINY_BLOB",
            FieldType::MediumBlob => "MEDIUM_BLOB",
            FieldType::LongBlob => "LONG_BLOB",
            FieldType::Blob => "BLOB",
            FieldType::VarString => "VAR_STRING",
            FieldType::String => "STRING",
            FieldType::Geometry => "GEOMETRY",
        };
        write!(f, "MYSQL_TYPE_{}", name)
    }
}
