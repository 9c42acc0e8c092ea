//! Column types for prepared statement results.

mod bind;
mod column;
mod column_type;
mod field;
mod field_type;
mod value;

pub use bind::OutputBind;
pub use column::MetaColumn;
pub use column_type::{column_size, ColumnDataType};
pub use field::FieldDescriptor;
pub use field_type::FieldType;
pub use value::ColumnValue;
