//! Statement-side interface consumed by the result metadata store.
//!
//! The client library adapter implements `ResultSource` for its statement
//! handle. `MetadataHandle` wraps the result metadata resource so that it is
//! freed on every exit path of `ResultMetadata::init`.

use crate::protocol::types::FieldDescriptor;

/// A prepared statement able to describe its result columns.
///
/// This mirrors `mysql_stmt_result_metadata`, `mysql_num_fields`,
/// `mysql_fetch_fields` and `mysql_free_result`.
pub trait ResultSource {
    /// Result metadata resource (`MYSQL_RES` for the C client).
    type Resource;

    /// Request the result metadata of this statement.
    ///
    /// Returns `None` when the statement produces no result set
    /// (INSERT, UPDATE, DDL).
    fn result_metadata(&mut self) -> Option<Self::Resource>;

    /// Number of fields described by `resource`.
    fn num_fields(&self, resource: &Self::Resource) -> usize;

    /// Field descriptors of `resource`, in column order.
    fn fetch_fields<'r>(&self, resource: &'r Self::Resource) -> &'r [FieldDescriptor];

    /// Release a resource obtained from `result_metadata`.
    fn free_result(&mut self, resource: Self::Resource);
}

/// Scoped owner of a statement's result metadata resource.
///
/// The resource, if any, is released exactly once when the handle is
/// dropped.
pub struct MetadataHandle<'s, S: ResultSource> {
    source: &'s mut S,
    resource: Option<S::Resource>,
}

impl<'s, S: ResultSource> MetadataHandle<'s, S> {
    /// Acquire the result metadata of `source`.
    pub fn new(source: &'s mut S) -> Self {
        let resource = source.result_metadata();
        Self { source, resource }
    }

    /// Check if the statement returned result metadata.
    pub fn is_present(&self) -> bool {
        self.resource.is_some()
    }

    /// Number of result fields (0 when absent).
    pub fn num_fields(&self) -> usize {
        self.resource
            .as_ref()
            .map_or(0, |res| self.source.num_fields(res))
    }

    /// Result field descriptors (empty when absent).
    pub fn fields(&self) -> &[FieldDescriptor] {
        match &self.resource {
            Some(res) => self.source.fetch_fields(res),
            None => &[],
        }
    }
}

impl<S: ResultSource> Drop for MetadataHandle<'_, S> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            self.source.free_result(resource);
        }
    }
}
