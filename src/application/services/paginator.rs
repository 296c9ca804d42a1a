//! Collection paginator - cursor-based paging over the document store
//!
//! Wraps the raw store port with the limit+1 paging algorithm and with the
//! strict/lenient point-lookup semantics the use cases need.

use std::sync::Arc;

use crate::application::ports::outbound::{
    DocumentStorePort, PageCursor, SortDirection, StoreError,
};
use crate::application::services::document_mapper;
use crate::domain::value_objects::{RawDocument, RawValue};

/// One page of raw documents.
#[derive(Debug)]
pub struct DocumentPage {
    /// At most `limit` documents, in sort order.
    pub documents: Vec<RawDocument>,
    /// Cursor for the following page, derived from the last returned
    /// document. `None` when the page is empty.
    pub next_cursor: Option<PageCursor>,
    /// Whether more documents exist beyond this page.
    pub has_more: bool,
}

pub struct CollectionPaginator<D> {
    store: Arc<D>,
}

impl<D> Clone for CollectionPaginator<D> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<D: DocumentStorePort> CollectionPaginator<D> {
    pub fn new(store: Arc<D>) -> Self {
        Self { store }
    }

    /// Fetch a page of at most `limit` documents.
    ///
    /// Requests `limit + 1` documents to learn whether another page exists,
    /// then trims the extra one. The next-page cursor is taken from the
    /// sort field of the last document actually returned - never from the
    /// trimmed-off probe document.
    pub async fn get_page(
        &self,
        collection: &str,
        limit: usize,
        sort_field: &str,
        direction: SortDirection,
        cursor: Option<&PageCursor>,
    ) -> Result<DocumentPage, StoreError> {
        let mut documents = self
            .store
            .query_documents(collection, limit + 1, sort_field, direction, cursor)
            .await?;

        let has_more = documents.len() > limit;
        if has_more {
            documents.truncate(limit);
        }

        let next_cursor = documents
            .last()
            .and_then(|doc| doc.get(sort_field))
            .map(|value| PageCursor::new(vec![value.clone()]));

        tracing::debug!(
            collection,
            returned = documents.len(),
            has_more,
            "fetched collection page"
        );

        Ok(DocumentPage { documents, next_cursor, has_more })
    }

    /// Strict point lookup: every requested id must exist, otherwise the
    /// first missing id fails with [`StoreError::NotFound`].
    pub async fn get_documents_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<RawDocument>, StoreError> {
        let documents = self.find_documents_by_ids(collection, ids).await?;
        if documents.len() != ids.len() {
            let found: Vec<Option<String>> = documents
                .iter()
                .map(|doc| document_mapper::optional_string(doc, "id"))
                .collect();
            let missing = ids
                .iter()
                .find(|id| !found.iter().any(|f| f.as_deref() == Some(id.as_str())))
                .cloned()
                .unwrap_or_default();
            return Err(StoreError::NotFound { collection: collection.to_string(), id: missing });
        }
        Ok(documents)
    }

    /// Lenient point lookup: returns the documents that exist, in the
    /// requested id order, silently omitting missing ids. Used where
    /// partial results are expected, e.g. move enrichment after catalog
    /// content drift.
    pub async fn find_documents_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<RawDocument>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let fetched = self.store.fetch_documents_by_ids(collection, ids).await?;

        // Re-order to the requested sequence; the store makes no ordering
        // promise for point lookups.
        let mut by_id: Vec<(String, RawDocument)> = fetched
            .into_iter()
            .filter_map(|doc| {
                document_mapper::optional_string(&doc, "id").map(|id| (id, doc))
            })
            .collect();

        let mut ordered = Vec::with_capacity(by_id.len());
        for id in ids {
            if let Some(pos) = by_id.iter().position(|(doc_id, _)| doc_id == id) {
                ordered.push(by_id.swap_remove(pos).1);
            }
        }
        Ok(ordered)
    }

    /// All documents whose `field` equals `value`.
    pub async fn get_documents_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &RawValue,
    ) -> Result<Vec<RawDocument>, StoreError> {
        self.store.fetch_documents_by_field(collection, field, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashSet;

    /// In-memory store over a fixed snapshot of documents.
    struct FixedStore {
        docs: Vec<RawDocument>,
    }

    impl FixedStore {
        fn with_ids(count: usize) -> Self {
            let docs = (0..count)
                .map(|i| {
                    RawDocument::from(json!({
                        "id": format!("doc{i:02}"),
                        "imageTimestamp": format!("2026-08-01T00:00:{i:02}Z"),
                    }))
                })
                .collect();
            Self { docs }
        }
    }

    #[async_trait]
    impl DocumentStorePort for FixedStore {
        async fn add_document(
            &self,
            _collection: &str,
            _doc: &RawDocument,
        ) -> Result<String, StoreError> {
            unimplemented!("read-only fixture")
        }

        async fn query_documents(
            &self,
            _collection: &str,
            limit: usize,
            sort_field: &str,
            direction: SortDirection,
            start_after: Option<&PageCursor>,
        ) -> Result<Vec<RawDocument>, StoreError> {
            let mut docs = self.docs.clone();
            docs.sort_by(|a, b| {
                let a = document_mapper::optional_string(a, sort_field).unwrap_or_default();
                let b = document_mapper::optional_string(b, sort_field).unwrap_or_default();
                match direction {
                    SortDirection::Ascending => a.cmp(&b),
                    SortDirection::Descending => b.cmp(&a),
                }
            });

            if let Some(cursor) = start_after {
                let after = cursor.values().first().and_then(RawValue::as_str).unwrap_or("");
                docs.retain(|doc| {
                    let value =
                        document_mapper::optional_string(doc, sort_field).unwrap_or_default();
                    match direction {
                        SortDirection::Ascending => value.as_str() > after,
                        SortDirection::Descending => value.as_str() < after,
                    }
                });
            }

            docs.truncate(limit);
            Ok(docs)
        }

        async fn fetch_documents_by_ids(
            &self,
            _collection: &str,
            ids: &[String],
        ) -> Result<Vec<RawDocument>, StoreError> {
            Ok(self
                .docs
                .iter()
                .filter(|doc| {
                    document_mapper::optional_string(doc, "id")
                        .map(|id| ids.contains(&id))
                        .unwrap_or(false)
                })
                .cloned()
                .collect())
        }

        async fn fetch_documents_by_field(
            &self,
            _collection: &str,
            field: &str,
            value: &RawValue,
        ) -> Result<Vec<RawDocument>, StoreError> {
            Ok(self
                .docs
                .iter()
                .filter(|doc| doc.get(field) == Some(value))
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn paging_covers_the_full_set_without_duplicates_or_gaps() {
        let paginator = CollectionPaginator::new(Arc::new(FixedStore::with_ids(25)));

        let mut seen = HashSet::new();
        let mut cursor: Option<PageCursor> = None;
        let mut sizes = Vec::new();

        loop {
            let page = paginator
                .get_page("c", 10, "imageTimestamp", SortDirection::Ascending, cursor.as_ref())
                .await
                .unwrap();
            sizes.push(page.documents.len());
            for doc in &page.documents {
                assert!(seen.insert(document_mapper::optional_string(doc, "id").unwrap()));
            }
            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
        }

        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(seen.len(), 25);
    }

    #[tokio::test]
    async fn cursor_derives_from_last_returned_document() {
        let paginator = CollectionPaginator::new(Arc::new(FixedStore::with_ids(12)));

        let page = paginator
            .get_page("c", 10, "imageTimestamp", SortDirection::Ascending, None)
            .await
            .unwrap();

        assert!(page.has_more);
        assert_eq!(page.documents.len(), 10);
        // The 10th document (index 9) is the last returned one; the probe
        // document for has-more detection must not leak into the cursor.
        let cursor = page.next_cursor.unwrap();
        assert_eq!(
            cursor.values().first().and_then(RawValue::as_str),
            Some("2026-08-01T00:00:09Z")
        );
    }

    #[tokio::test]
    async fn empty_collection_yields_empty_page_without_cursor() {
        let paginator = CollectionPaginator::new(Arc::new(FixedStore { docs: Vec::new() }));

        let page = paginator
            .get_page("c", 10, "imageTimestamp", SortDirection::Descending, None)
            .await
            .unwrap();

        assert!(page.documents.is_empty());
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn strict_lookup_fails_on_missing_id() {
        let paginator = CollectionPaginator::new(Arc::new(FixedStore::with_ids(2)));
        let ids = vec!["doc00".to_string(), "ghost".to_string()];

        let err = paginator.get_documents_by_ids("c", &ids).await.unwrap_err();
        match err {
            StoreError::NotFound { collection, id } => {
                assert_eq!(collection, "c");
                assert_eq!(id, "ghost");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lenient_lookup_omits_missing_and_preserves_order() {
        let paginator = CollectionPaginator::new(Arc::new(FixedStore::with_ids(3)));
        let ids =
            vec!["doc02".to_string(), "ghost".to_string(), "doc00".to_string()];

        let docs = paginator.find_documents_by_ids("c", &ids).await.unwrap();
        let returned: Vec<String> = docs
            .iter()
            .map(|doc| document_mapper::optional_string(doc, "id").unwrap())
            .collect();
        assert_eq!(returned, vec!["doc02", "doc00"]);
    }
}
