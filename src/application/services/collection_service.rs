//! Collection service - paginated, enriched listing of a user's creatures

use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::outbound::{
    BlobStorePort, DocumentStorePort, PageCursor, SortDirection, StoreError,
};
use crate::application::services::enrichment;
use crate::application::services::paginator::CollectionPaginator;
use crate::domain::entities::Creature;

/// Sort field for creature listings: newest first.
const SORT_FIELD: &str = "imageTimestamp";

/// One page of creatures.
#[derive(Debug)]
pub struct CreaturePage {
    pub creatures: Vec<Creature>,
    pub next_cursor: Option<PageCursor>,
    pub has_more: bool,
}

pub struct CollectionService<B, D> {
    blob_store: Arc<B>,
    paginator: CollectionPaginator<D>,
    bucket: String,
}

impl<B, D> CollectionService<B, D>
where
    B: BlobStorePort,
    D: DocumentStorePort,
{
    pub fn new(blob_store: Arc<B>, store: Arc<D>, bucket: impl Into<String>) -> Self {
        Self {
            blob_store,
            paginator: CollectionPaginator::new(store),
            bucket: bucket.into(),
        }
    }

    /// Fetch one page of the user's creatures, newest first, each enriched
    /// with resolved asset URLs and catalog moves.
    #[instrument(skip(self, cursor), fields(user_id = %user_id))]
    pub async fn fetch(
        &self,
        user_id: &str,
        limit: usize,
        cursor: Option<&PageCursor>,
    ) -> Result<CreaturePage, StoreError> {
        let collection = format!("users/{user_id}/creatures");
        let page = self
            .paginator
            .get_page(&collection, limit, SORT_FIELD, SortDirection::Descending, cursor)
            .await?;

        let mut creatures = Vec::with_capacity(page.documents.len());
        for doc in &page.documents {
            let creature = enrichment::assemble_creature(
                doc,
                self.blob_store.as_ref(),
                &self.paginator,
                &self.bucket,
            )
            .await?;
            creatures.push(creature);
        }

        Ok(CreaturePage {
            creatures,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        })
    }
}
