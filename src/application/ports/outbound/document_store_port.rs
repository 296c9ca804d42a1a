//! Document store port - loosely-typed document persistence
//!
//! The store holds string-keyed documents in named collections, assigns
//! document ids on insert, and supports ordered, cursor-based reads. The
//! concrete driver is a host concern; everything here speaks
//! [`RawDocument`].

use async_trait::async_trait;

use crate::domain::value_objects::{RawDocument, RawValue};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document {id} not found in {collection}")]
    NotFound { collection: String, id: String },
    #[error("document store error: {0}")]
    Backend(String),
}

/// Sort order for collection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Opaque pagination token.
///
/// Holds the sort-field values of the last document of the previous page,
/// in the shape the store's start-after API expects. Callers pass it back
/// verbatim; `None` means "first page".
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor(Vec<RawValue>);

impl PageCursor {
    pub fn new(values: Vec<RawValue>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[RawValue] {
        &self.0
    }
}

/// Port for the document store.
///
/// Implementations must inject the assigned document id into each returned
/// document under the `"id"` field.
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Insert a document and return the store-assigned id.
    async fn add_document(
        &self,
        collection: &str,
        doc: &RawDocument,
    ) -> Result<String, StoreError>;

    /// Fetch up to `limit` documents ordered by `sort_field`, starting
    /// after the cursor position when one is given.
    async fn query_documents(
        &self,
        collection: &str,
        limit: usize,
        sort_field: &str,
        direction: SortDirection,
        start_after: Option<&PageCursor>,
    ) -> Result<Vec<RawDocument>, StoreError>;

    /// Point lookup of several documents. Returns only the documents that
    /// exist; missing ids are not an error at this level (strictness is
    /// layered on by the paginator).
    async fn fetch_documents_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<RawDocument>, StoreError>;

    /// All documents whose `field` equals `value`.
    async fn fetch_documents_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &RawValue,
    ) -> Result<Vec<RawDocument>, StoreError>;
}
