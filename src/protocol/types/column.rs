//! MetaColumn type for user-facing API.
//!
//! A `MetaColumn` is the portable description of one result column,
//! derived from the wire `FieldDescriptor`.

use crate::error::Result;

use super::column_type::{column_size, ColumnDataType};
use super::field::FieldDescriptor;

/// A column in a result set (user-facing representation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaColumn {
    position: usize,
    name: String,
    data_type: ColumnDataType,
    length: usize,
    precision: usize,
    nullable: bool,
}

impl MetaColumn {
    /// Create a column description.
    pub fn new(
        position: usize,
        name: impl Into<String>,
        data_type: ColumnDataType,
        length: usize,
        precision: usize,
        nullable: bool,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            data_type,
            length,
            precision,
            nullable,
        }
    }

    /// Create a column from a wire field.
    ///
    /// Precision is always 0; the prepared statement field list does not
    /// expose it.
    ///
    /// Returns error if the wire type code is not recognized.
    pub fn from_field(position: usize, field: &FieldDescriptor) -> Result<Self> {
        Ok(Self::new(
            position,
            field.name.clone(),
            ColumnDataType::from_field(field),
            column_size(field)?,
            0,
            !field.is_not_null(),
        ))
    }

    /// Zero-based position in the result set.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Portable data type.
    pub fn data_type(&self) -> ColumnDataType {
        self.data_type
    }

    /// Storage size in bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Numeric precision, always 0.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Whether NULL values are allowed.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub(crate) fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}
