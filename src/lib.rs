//! Result metadata and fetch buffers for MySQL prepared statements
//!
//! Maps the field descriptors reported by the MySQL client library onto a
//! portable column model and builds the output bindings the client library
//! fetches rows into: one contiguous value buffer plus a length slot and a
//! null slot per column.
//!
//! # Example
//!
//! ```no_run
//! use mysql_result_metadata::{ResultMetadata, ResultSource, Result};
//!
//! fn read_first_column<S: ResultSource>(stmt: &mut S) -> Result<()> {
//!     let mut meta = ResultMetadata::new();
//!     meta.init(stmt)?;
//!
//!     if meta.columns_returned() == 0 {
//!         // INSERT, UPDATE and friends have no result set
//!         return Ok(());
//!     }
//!
//!     // Hand `meta.row()` to the client library's fetch call, then:
//!     println!("{} = {}", meta.meta_column(0).name(), meta.value(0)?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;
pub mod result_metadata;
pub mod statement;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::types::{
    column_size, ColumnDataType, ColumnValue, FieldDescriptor, FieldType, MetaColumn, OutputBind,
};
pub use result_metadata::{ResultMetadata, ResultMetadataOptions};
pub use statement::{MetadataHandle, ResultSource};
