//! Result metadata store for prepared statements.
//!
//! `ResultMetadata` describes the columns of a statement's result set and
//! owns the memory the client library fetches rows into: one contiguous
//! value buffer plus one length slot and one null slot per column. The
//! `OutputBind` array built by `init` points into that memory; the client
//! library adapter translates it into `MYSQL_BIND`s for the fetch routine.
//!
//! # Example
//!
//! ```no_run
//! use mysql_result_metadata::{ResultMetadata, ResultSource};
//!
//! fn describe<S: ResultSource>(stmt: &mut S) -> mysql_result_metadata::Result<()> {
//!     let mut meta = ResultMetadata::new();
//!     meta.init(stmt)?;
//!
//!     for column in meta.columns() {
//!         println!("{} {} ({} bytes)", column.name(), column.data_type(), column.length());
//!     }
//!     Ok(())
//! }
//! ```

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::protocol::decode::decode_column;
use crate::protocol::types::{ColumnValue, MetaColumn, OutputBind};
use crate::statement::{MetadataHandle, ResultSource};

/// Options controlling how result buffers are sized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMetadataOptions {
    /// Upper bound on the slot size of blob columns (default: none).
    pub blob_buffer_limit: Option<usize>,
}

impl ResultMetadataOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the buffer of TINY/MEDIUM/LONG/BLOB columns.
    ///
    /// Blob columns report their maximum size as declared length (4 GiB for
    /// LONGBLOB). With a limit, values longer than the limit are truncated
    /// by the fetch routine while `length()` still reports the full size.
    ///
    /// # Example
    ///
    /// ```
    /// use mysql_result_metadata::ResultMetadataOptions;
    ///
    /// let options = ResultMetadataOptions::new().with_blob_buffer_limit(64 * 1024);
    /// assert_eq!(options.blob_buffer_limit, Some(65536));
    /// ```
    pub fn with_blob_buffer_limit(mut self, limit: usize) -> Self {
        self.blob_buffer_limit = Some(limit);
        self
    }
}

/// Column descriptions and fetch buffers of one result set.
///
/// Owned by a single statement; not `Send` or `Sync` because the bindings
/// hold raw pointers into the store.
#[derive(Default)]
pub struct ResultMetadata {
    options: ResultMetadataOptions,
    columns: Vec<MetaColumn>,
    offsets: Vec<usize>,
    row: Vec<OutputBind>,
    // Lengths of these three are fixed between init and reset; the bindings
    // point into their heap storage. Vec rather than Box<[_]>: moving a Box
    // asserts unique access and would invalidate the binding pointers.
    buffer: Vec<u8>,
    lengths: Vec<u64>,
    is_null: Vec<u8>,
}

impl ResultMetadata {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom options.
    pub fn with_options(options: ResultMetadataOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &ResultMetadataOptions {
        &self.options
    }

    /// Drop all columns, bindings and buffers.
    pub fn reset(&mut self) {
        self.columns.clear();
        self.offsets.clear();
        self.row.clear();
        self.buffer = Vec::new();
        self.lengths = Vec::new();
        self.is_null = Vec::new();
    }

    /// Describe the result set of `stmt` and build its output bindings.
    ///
    /// A statement without result metadata leaves the store empty and is
    /// not an error. On error the store is also left empty.
    pub fn init<S: ResultSource>(&mut self, stmt: &mut S) -> Result<()> {
        self.reset();

        let handle = MetadataHandle::new(stmt);
        if !handle.is_present() {
            debug!("statement has no result metadata");
            return Ok(());
        }

        let fields = handle.fields();
        let count = handle.num_fields().min(fields.len());
        let fields = &fields[..count];

        let mut columns = Vec::with_capacity(count);
        let mut common_size = 0usize;

        for (position, field) in fields.iter().enumerate() {
            let mut column = MetaColumn::from_field(position, field).inspect_err(|e| {
                warn!(position, name = %field.name, type_code = field.type_code, error = %e,
                    "cannot size result column");
            })?;

            if let Some(limit) = self.options.blob_buffer_limit {
                let is_blob = field.field_type().is_some_and(|t| t.is_blob());
                if is_blob && column.length() > limit {
                    debug!(position, name = %field.name, declared = column.length(), limit,
                        "capping blob column buffer");
                    column = column.with_length(limit);
                }
            }

            common_size = common_size.checked_add(column.length()).ok_or_else(|| {
                Error::statement(format!("result row of {} columns exceeds addressable memory", count))
            })?;
            columns.push(column);
        }

        let mut buffer = zeroed::<u8>(common_size, "value buffer")?;
        let mut lengths = zeroed::<u64>(count, "length slots")?;
        let mut is_null = zeroed::<u8>(count, "null slots")?;
        let mut offsets = Vec::with_capacity(count);
        let mut row = Vec::with_capacity(count);

        let buffer_base = buffer.as_mut_ptr();
        let lengths_base = lengths.as_mut_ptr();
        let is_null_base = is_null.as_mut_ptr();

        let mut offset = 0usize;
        for (i, (column, field)) in columns.iter().zip(fields).enumerate() {
            let mut bind = OutputBind::default();
            bind.buffer_type = field.type_code;
            bind.buffer_length = column.length() as u64;
            // SAFETY: offset + column.length() <= common_size, and i < count
            // for both slot arrays.
            unsafe {
                bind.buffer = buffer_base.add(offset);
                bind.length = lengths_base.add(i);
                bind.is_null = is_null_base.add(i);
            }

            trace!(position = i, name = column.name(), offset, capacity = column.length(),
                "bound result column");

            offsets.push(offset);
            row.push(bind);
            offset += column.length();
        }

        debug!(columns = count, buffer_size = common_size, "initialized result metadata");

        self.columns = columns;
        self.offsets = offsets;
        self.row = row;
        self.buffer = buffer;
        self.lengths = lengths;
        self.is_null = is_null;
        Ok(())
    }

    /// Number of columns in the result set.
    pub fn columns_returned(&self) -> usize {
        self.columns.len()
    }

    /// Check if the store holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column description at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= columns_returned()`.
    pub fn meta_column(&self, pos: usize) -> &MetaColumn {
        &self.columns[pos]
    }

    /// Column description at `pos`, or an error if out of range.
    pub fn column(&self, pos: usize) -> Result<&MetaColumn> {
        self.columns.get(pos).ok_or(Error::ColumnIndexOutOfBounds {
            index: pos,
            count: self.columns.len(),
        })
    }

    /// All column descriptions, in position order.
    pub fn columns(&self) -> &[MetaColumn] {
        &self.columns
    }

    /// Find column position by name (ASCII case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Base of the binding array, for the client library adapter's fetch.
    ///
    /// The adapter translates each `OutputBind` into the library's own
    /// binding structure (`MYSQL_BIND`). The array holds `columns_returned()`
    /// bindings. With no columns the pointer is dangling and must not be
    /// dereferenced.
    pub fn row(&mut self) -> *mut OutputBind {
        self.row.as_mut_ptr()
    }

    /// Bindings, in position order.
    pub fn binds(&self) -> &[OutputBind] {
        &self.row
    }

    /// Offset of the column's slot in the value buffer.
    pub fn offset(&self, pos: usize) -> usize {
        self.offsets[pos]
    }

    /// Total size of the value buffer in bytes.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Length reported by the last fetch for the column at `pos`.
    pub fn length(&self, pos: usize) -> usize {
        self.lengths[pos] as usize
    }

    /// The column's full slot in the value buffer.
    ///
    /// Only the first `length(pos)` bytes hold the fetched value.
    pub fn raw_data(&self, pos: usize) -> &[u8] {
        let start = self.offsets[pos];
        &self.buffer[start..start + self.columns[pos].length()]
    }

    /// The fetched value bytes of the column at `pos`.
    ///
    /// Truncated to the slot capacity when the reported length is larger.
    pub fn data(&self, pos: usize) -> &[u8] {
        let raw = self.raw_data(pos);
        &raw[..self.length(pos).min(raw.len())]
    }

    /// Whether the last fetch reported the column at `pos` as NULL.
    pub fn is_null(&self, pos: usize) -> bool {
        self.is_null[pos] != 0
    }

    /// Decode the last fetched value of the column at `pos`.
    pub fn value(&self, pos: usize) -> Result<ColumnValue> {
        let column = self.column(pos)?;
        if self.is_null(pos) {
            return Ok(ColumnValue::Null);
        }
        decode_column(column.data_type(), self.raw_data(pos), self.data(pos))
    }
}

impl std::fmt::Debug for ResultMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultMetadata")
            .field("options", &self.options)
            .field("columns", &self.columns)
            .field("offsets", &self.offsets)
            .field("buffer_len", &self.buffer.len())
            .finish()
    }
}

/// Allocate `len` zeroed slots, failing instead of aborting when the
/// allocator refuses.
fn zeroed<T: Clone + Default>(len: usize, what: &str) -> Result<Vec<T>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len).map_err(|e| {
        warn!(len, what, error = %e, "cannot allocate result buffers");
        Error::statement(format!("cannot allocate {} of {} elements: {}", what, len, e))
    })?;
    slots.resize(len, T::default());
    Ok(slots)
}
