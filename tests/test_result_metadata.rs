//! Integration tests for result metadata against a simulated client library.
//!
//! Run with: cargo test --test test_result_metadata

use std::ptr;

use mysql_result_metadata::protocol::constants::*;
use mysql_result_metadata::{
    ColumnDataType, ColumnValue, Error, FieldDescriptor, OutputBind, ResultMetadata, ResultSource,
};

/// Statement double that describes a fixed field list and fetches rows
/// through the output bindings the way `mysql_stmt_fetch` does.
struct FakeStatement {
    fields: Option<Vec<FieldDescriptor>>,
    rows: Vec<Vec<Option<Vec<u8>>>>,
    next_row: usize,
    freed: usize,
}

impl FakeStatement {
    fn query(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields: Some(fields),
            rows: Vec::new(),
            next_row: 0,
            freed: 0,
        }
    }

    fn non_query() -> Self {
        Self {
            fields: None,
            rows: Vec::new(),
            next_row: 0,
            freed: 0,
        }
    }

    fn with_row(mut self, row: Vec<Option<Vec<u8>>>) -> Self {
        self.rows.push(row);
        self
    }

    /// Write the next row into `count` bindings starting at `binds`.
    ///
    /// # Safety
    ///
    /// `binds` must point to `count` bindings produced by `ResultMetadata::init`.
    unsafe fn fetch(&mut self, binds: *mut OutputBind, count: usize) -> bool {
        let Some(row) = self.rows.get(self.next_row) else {
            return false;
        };
        for (i, value) in row.iter().enumerate().take(count) {
            let bind = &*binds.add(i);
            match value {
                None => {
                    *bind.is_null = 1;
                    *bind.length = 0;
                }
                Some(bytes) => {
                    let n = bytes.len().min(bind.buffer_length as usize);
                    ptr::copy_nonoverlapping(bytes.as_ptr(), bind.buffer, n);
                    *bind.length = bytes.len() as u64;
                    *bind.is_null = 0;
                }
            }
        }
        self.next_row += 1;
        true
    }
}

impl ResultSource for FakeStatement {
    type Resource = Vec<FieldDescriptor>;

    fn result_metadata(&mut self) -> Option<Self::Resource> {
        self.fields.clone()
    }

    fn num_fields(&self, resource: &Self::Resource) -> usize {
        resource.len()
    }

    fn fetch_fields<'r>(&self, resource: &'r Self::Resource) -> &'r [FieldDescriptor] {
        resource
    }

    fn free_result(&mut self, _resource: Self::Resource) {
        self.freed += 1;
    }
}

fn fetch(stmt: &mut FakeStatement, meta: &mut ResultMetadata) -> bool {
    let count = meta.columns_returned();
    let binds = meta.row();
    unsafe { stmt.fetch(binds, count) }
}

#[test]
fn test_two_column_layout() {
    let mut stmt = FakeStatement::query(vec![
        FieldDescriptor::new("id", MYSQL_TYPE_LONG, 999),
        FieldDescriptor::new("name", MYSQL_TYPE_VAR_STRING, 50),
    ]);
    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();

    assert_eq!(meta.columns_returned(), 2);
    assert_eq!(meta.meta_column(0).length(), 4);
    assert_eq!(meta.meta_column(1).length(), 50);
    assert_eq!(meta.buffer_len(), 54);
    assert_eq!(meta.offset(0), 0);
    assert_eq!(meta.offset(1), 4);

    let base = meta.raw_data(0).as_ptr();
    let binds = meta.binds();
    assert_eq!(binds[0].buffer as *const u8, base);
    assert_eq!(binds[1].buffer as *const u8, base.wrapping_add(4));
    assert!(binds.iter().all(OutputBind::is_bound));
    assert_eq!(stmt.freed, 1);
}

#[test]
fn test_fetch_values_through_bindings() {
    let mut stmt = FakeStatement::query(vec![
        FieldDescriptor::new("id", MYSQL_TYPE_LONGLONG, 20).with_flags(NOT_NULL_FLAG),
        FieldDescriptor::new("score", MYSQL_TYPE_DOUBLE, 22),
        FieldDescriptor::new("name", MYSQL_TYPE_VAR_STRING, 16),
        FieldDescriptor::new("born", MYSQL_TYPE_DATE, 10),
        FieldDescriptor::new("age", MYSQL_TYPE_TINY, 3).with_flags(UNSIGNED_FLAG),
    ])
    .with_row(vec![
        Some(42i64.to_ne_bytes().to_vec()),
        Some(9.75f64.to_ne_bytes().to_vec()),
        Some(b"alice".to_vec()),
        Some(b"1990-04-01".to_vec()),
        Some(vec![200]),
    ])
    .with_row(vec![
        Some((-1i64).to_ne_bytes().to_vec()),
        None,
        Some(b"bob".to_vec()),
        None,
        Some(vec![7]),
    ]);

    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();
    assert_eq!(meta.meta_column(4).data_type(), ColumnDataType::UInt8);

    assert!(fetch(&mut stmt, &mut meta));
    assert_eq!(meta.value(0).unwrap(), ColumnValue::Int64(42));
    assert_eq!(meta.value(1).unwrap(), ColumnValue::Double(9.75));
    assert_eq!(meta.length(2), 5);
    assert_eq!(meta.data(2), b"alice");
    assert_eq!(meta.value(2).unwrap(), ColumnValue::String("alice".to_string()));
    assert_eq!(meta.value(3).unwrap().as_bytes(), Some(&b"1990-04-01"[..]));
    assert_eq!(meta.value(4).unwrap(), ColumnValue::UInt8(200));
    assert!(!meta.is_null(1));

    assert!(fetch(&mut stmt, &mut meta));
    assert_eq!(meta.value(0).unwrap(), ColumnValue::Int64(-1));
    assert!(meta.is_null(1));
    assert_eq!(meta.value(1).unwrap(), ColumnValue::Null);
    assert_eq!(meta.length(2), 3);
    assert_eq!(meta.data(2), b"bob");
    assert!(meta.is_null(3));
    assert_eq!(meta.value(4).unwrap(), ColumnValue::UInt8(7));

    assert!(!fetch(&mut stmt, &mut meta));
}

#[test]
fn test_truncated_value_reports_full_length() {
    let mut stmt = FakeStatement::query(vec![FieldDescriptor::new(
        "note",
        MYSQL_TYPE_VAR_STRING,
        4,
    )])
    .with_row(vec![Some(b"truncated".to_vec())]);

    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();
    assert!(fetch(&mut stmt, &mut meta));

    assert_eq!(meta.length(0), 9);
    assert_eq!(meta.raw_data(0), b"trun");
    assert_eq!(meta.data(0), b"trun");
}

#[test]
fn test_bindings_survive_moving_the_store() {
    let mut stmt = FakeStatement::query(vec![FieldDescriptor::new("n", MYSQL_TYPE_LONG, 11)])
        .with_row(vec![Some(1234i32.to_ne_bytes().to_vec())]);

    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();

    let mut moved = Box::new(meta);
    assert!(fetch(&mut stmt, &mut moved));
    assert_eq!(moved.value(0).unwrap(), ColumnValue::Int32(1234));
}

#[test]
fn test_non_query_statement() {
    let mut stmt = FakeStatement::non_query();
    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();

    assert_eq!(meta.columns_returned(), 0);
    assert!(meta.columns().is_empty());
    assert!(meta.binds().is_empty());
    assert_eq!(stmt.freed, 0);
}

#[test]
fn test_zero_column_result() {
    let mut stmt = FakeStatement::query(Vec::new());
    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();

    assert_eq!(meta.columns_returned(), 0);
    assert_eq!(meta.buffer_len(), 0);
    assert_eq!(stmt.freed, 1);
}

#[test]
fn test_reinit_replaces_previous_layout() {
    let mut first = FakeStatement::query(vec![
        FieldDescriptor::new("a", MYSQL_TYPE_LONG, 11),
        FieldDescriptor::new("b", MYSQL_TYPE_BLOB, 65535),
    ]);
    let mut second = FakeStatement::query(vec![FieldDescriptor::new("c", MYSQL_TYPE_SHORT, 6)]);

    let mut meta = ResultMetadata::new();
    meta.init(&mut first).unwrap();
    assert_eq!(meta.buffer_len(), 65539);

    meta.init(&mut second).unwrap();
    assert_eq!(meta.columns_returned(), 1);
    assert_eq!(meta.meta_column(0).name(), "c");
    assert_eq!(meta.buffer_len(), 2);
    assert_eq!(meta.binds().len(), 1);

    meta.init(&mut FakeStatement::non_query()).unwrap();
    assert_eq!(meta.columns_returned(), 0);
}

#[test]
fn test_unrecognized_type_fails_init() {
    let mut stmt = FakeStatement::query(vec![
        FieldDescriptor::new("a", MYSQL_TYPE_LONG, 11),
        FieldDescriptor::new("b", 120, 16),
    ]);
    let mut meta = ResultMetadata::new();

    let err = meta.init(&mut stmt).unwrap_err();
    assert!(matches!(err, Error::Statement { .. }));
    assert!(err.to_string().contains("unknown field type 120"));
    assert_eq!(meta.columns_returned(), 0);
    assert_eq!(stmt.freed, 1);
}

#[test]
fn test_precision_is_never_reported() {
    let mut stmt = FakeStatement::query(vec![
        FieldDescriptor::new("price", MYSQL_TYPE_NEWDECIMAL, 12),
        FieldDescriptor::new("ratio", MYSQL_TYPE_DOUBLE, 22),
    ]);
    let mut meta = ResultMetadata::new();
    meta.init(&mut stmt).unwrap();

    assert!(meta.columns().iter().all(|c| c.precision() == 0));
    assert_eq!(meta.meta_column(0).data_type(), ColumnDataType::Unknown);
    assert_eq!(meta.meta_column(0).length(), 12);
}
