//! Creature enrichment - stored document to fully-resolved entity
//!
//! Both the generation pipeline and the collection listing end in the same
//! step: take a stored document, map its fields, resolve blob paths to
//! download URLs, and resolve move ids against the catalog.

use crate::application::ports::outbound::{BlobStorePort, DocumentStorePort, StoreError};
use crate::application::services::document_mapper;
use crate::application::services::paginator::CollectionPaginator;
use crate::domain::entities::{Creature, Move};
use crate::domain::value_objects::RawDocument;

/// The shared catalog collection of battle moves.
pub const MOVES_COLLECTION: &str = "moves";

/// Build a [`Creature`] from a stored document.
///
/// URL resolution is tolerant: an absent path or a failed resolution leaves
/// the URL field empty. Move resolution is lenient: ids missing from the
/// catalog are omitted (content drift), while a store backend failure
/// propagates.
pub async fn assemble_creature<B, D>(
    doc: &RawDocument,
    blob_store: &B,
    paginator: &CollectionPaginator<D>,
    bucket: &str,
) -> Result<Creature, StoreError>
where
    B: BlobStorePort,
    D: DocumentStorePort,
{
    let mut creature = document_mapper::creature_fields(doc);

    let (original, generated) = tokio::join!(
        resolve_url(doc, "originalImageFilePath", blob_store, bucket),
        resolve_url(doc, "generatedImageFilePath", blob_store, bucket),
    );
    creature.original_image_url = original;
    creature.generated_image_url = generated;

    if let Some(move_ids) = document_mapper::optional_string_array(doc, "moveIds") {
        let move_docs = paginator.find_documents_by_ids(MOVES_COLLECTION, &move_ids).await?;
        if move_docs.len() < move_ids.len() {
            tracing::debug!(
                requested = move_ids.len(),
                resolved = move_docs.len(),
                "some referenced moves are gone from the catalog"
            );
        }
        creature.moves = move_docs.iter().filter_map(move_from_document).collect();
    }

    Ok(creature)
}

async fn resolve_url<B: BlobStorePort>(
    doc: &RawDocument,
    path_field: &str,
    blob_store: &B,
    bucket: &str,
) -> Option<String> {
    let path = document_mapper::optional_string(doc, path_field)?;
    match blob_store.get_download_url(bucket, &path).await {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(%path, %err, "download URL resolution failed");
            None
        }
    }
}

fn move_from_document(doc: &RawDocument) -> Option<Move> {
    let id = document_mapper::optional_string(doc, "id")?;
    Some(Move {
        id,
        name: document_mapper::optional_string(doc, "name"),
        element: document_mapper::optional_element(doc, "type"),
    })
}
