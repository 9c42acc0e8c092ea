//! MySQL client protocol types for result metadata.

pub mod constants;
pub mod decode;
pub mod types;

pub use types::{
    column_size, ColumnDataType, ColumnValue, FieldDescriptor, FieldType, MetaColumn, OutputBind,
};
