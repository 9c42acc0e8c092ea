//! Output binding descriptor for result columns.
//!
//! The store builds one `OutputBind` per column and hands out the array
//! base. This is not `MYSQL_BIND`: the client library adapter copies the
//! type, pointers and capacity into its own binding structures, and the
//! fetch routine then writes each column's value, length and null
//! indicator through these pointers.

use std::ptr;

/// Output binding for one result column.
///
/// Pointers reference storage owned by `ResultMetadata` and stay valid
/// until its next `reset`/`init` or until it is dropped.
#[derive(Debug)]
pub struct OutputBind {
    /// Wire type code, passed through unchanged for the adapter.
    pub buffer_type: u32,
    /// Start of this column's slot in the shared value buffer.
    pub buffer: *mut u8,
    /// Capacity of the slot in bytes.
    pub buffer_length: u64,
    /// Where the fetch routine reports the value length.
    pub length: *mut u64,
    /// Where the fetch routine reports a NULL value (non-zero means NULL).
    pub is_null: *mut u8,
}

impl Default for OutputBind {
    fn default() -> Self {
        Self {
            buffer_type: 0,
            buffer: ptr::null_mut(),
            buffer_length: 0,
            length: ptr::null_mut(),
            is_null: ptr::null_mut(),
        }
    }
}

impl OutputBind {
    /// Check if every pointer of this binding has been set.
    pub fn is_bound(&self) -> bool {
        !self.length.is_null() && !self.is_null.is_null() && !self.buffer.is_null()
    }
}
