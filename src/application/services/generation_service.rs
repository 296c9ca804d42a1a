//! Generation service - the photo-to-creature pipeline
//!
//! Drives the full sequence: vision generation, artwork generation, photo
//! decoding, blob writes, move selection, document persistence, and final
//! enrichment into the returned entity. The pipeline is strictly
//! sequential; the first failing stage aborts the run and the error names
//! that stage. Nothing is retried and nothing already written is cleaned
//! up on a later failure (orphaned blobs are an accepted outcome, see
//! DESIGN.md).

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::application::ports::outbound::{
    BlobError, BlobStorePort, DocumentStorePort, GeneratorError, ImageGeneratorPort, StoreError,
    VisionGeneratorPort,
};
use crate::application::services::document_mapper;
use crate::application::services::enrichment::{self, MOVES_COLLECTION};
use crate::application::services::move_selector::MoveSelector;
use crate::application::services::paginator::CollectionPaginator;
use crate::domain::entities::Creature;
use crate::domain::value_objects::{ElementType, RawDocument, RawValue, SecondaryType};

/// Moves drawn per candidate pool.
const MOVES_PER_POOL: usize = 2;

/// Data-URI prefixes a submitted photo may carry.
const PHOTO_PREFIXES: [&str; 2] = ["data:image/jpg;base64,", "data:image/jpeg;base64,"];

/// Pipeline failure, tagged with the stage that failed and carrying the
/// underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("creature profile generation failed: {0}")]
    ProfileGeneration(#[source] GeneratorError),
    #[error("artwork generation failed: {0}")]
    ImageGeneration(#[source] GeneratorError),
    #[error("submitted photo is not valid base64 image data: {0}")]
    InvalidPhoto(String),
    #[error("asset write failed: {0}")]
    AssetWrite(#[source] BlobError),
    #[error("move catalog lookup failed: {0}")]
    MoveLookup(#[source] StoreError),
    #[error("creature document persistence failed: {0}")]
    Persistence(#[source] StoreError),
    #[error("creature enrichment failed: {0}")]
    Enrichment(#[source] StoreError),
}

pub struct GenerationService<V, I, B, D> {
    vision: V,
    image_generator: I,
    blob_store: Arc<B>,
    store: Arc<D>,
    paginator: CollectionPaginator<D>,
    selector: MoveSelector,
    bucket: String,
}

impl<V, I, B, D> GenerationService<V, I, B, D>
where
    V: VisionGeneratorPort,
    I: ImageGeneratorPort,
    B: BlobStorePort,
    D: DocumentStorePort,
{
    pub fn new(
        vision: V,
        image_generator: I,
        blob_store: Arc<B>,
        store: Arc<D>,
        selector: MoveSelector,
        bucket: impl Into<String>,
    ) -> Self {
        let paginator = CollectionPaginator::new(store.clone());
        Self {
            vision,
            image_generator,
            blob_store,
            store,
            paginator,
            selector,
            bucket: bucket.into(),
        }
    }

    /// Turn a submitted photo into a persisted creature.
    ///
    /// Ordering invariant: both asset writes complete before the document
    /// is persisted, so a stored creature always references existing
    /// blobs. The converse does not hold - a failure after the writes
    /// leaves the blobs in place.
    #[instrument(skip_all, fields(user_id = %user_id, run_id = %Uuid::new_v4()))]
    pub async fn process(
        &self,
        photo_base64: &str,
        user_id: &str,
    ) -> Result<Creature, GenerationError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let profile = self
            .vision
            .generate_profile(photo_base64)
            .await
            .map_err(GenerationError::ProfileGeneration)?;
        debug!(name = %profile.name, primary = %profile.primary_type, "creature profile generated");

        let artwork = self
            .image_generator
            .generate_image(&profile.image_generation_prompt)
            .await
            .map_err(GenerationError::ImageGeneration)?;
        debug!(bytes = artwork.bytes.len(), "artwork generated");

        let photo_bytes = decode_photo(photo_base64)?;

        let original_path = format!("photos/{user_id}/{timestamp}-original.jpeg");
        self.blob_store
            .write(&self.bucket, &original_path, &photo_bytes, "image/jpeg")
            .await
            .map_err(GenerationError::AssetWrite)?;

        let generated_path = format!(
            "generatedImages/{user_id}/{timestamp}-generated.{}",
            artwork.file_extension
        );
        self.blob_store
            .write(&self.bucket, &generated_path, &artwork.bytes, &artwork.content_type)
            .await
            .map_err(GenerationError::AssetWrite)?;
        debug!(%original_path, %generated_path, "assets stored");

        let move_ids = self
            .select_move_ids(profile.primary_type, profile.secondary_type)
            .await
            .map_err(GenerationError::MoveLookup)?;

        let mut doc = RawDocument::new()
            .with("imageTimestamp", timestamp)
            .with("name", profile.name.clone())
            .with("description", profile.description.clone())
            .with("imageGenerationPrompt", profile.image_generation_prompt.clone())
            .with("photoObject", profile.photo_object.clone())
            .with("primaryType", profile.primary_type.as_str())
            .with("secondaryType", profile.secondary_type.as_str())
            .with("height", profile.height)
            .with("weight", profile.weight)
            .with("strength", profile.strength)
            .with("toughness", profile.toughness)
            .with("agility", profile.agility)
            .with("arcana", profile.arcana)
            .with("aura", profile.aura)
            .with("charisma", profile.charisma)
            .with("intimidation", profile.intimidation)
            .with("endurance", profile.endurance)
            .with("luck", profile.luck)
            .with("originalImageFilePath", original_path)
            .with("generatedImageFilePath", generated_path)
            .with("moveIds", move_ids);

        let collection = format!("users/{user_id}/creatures");
        let doc_id = self
            .store
            .add_document(&collection, &doc)
            .await
            .map_err(GenerationError::Persistence)?;
        debug!(%doc_id, "creature document persisted");

        doc.set("id", doc_id);
        enrichment::assemble_creature(&doc, self.blob_store.as_ref(), &self.paginator, &self.bucket)
            .await
            .map_err(GenerationError::Enrichment)
    }

    /// Pick up to two moves from the primary-type pool and up to two from
    /// the secondary pool; without a secondary type the second draw comes
    /// from the primary pool again. The union is de-duplicated, so thin or
    /// overlapping pools simply yield fewer moves.
    async fn select_move_ids(
        &self,
        primary: ElementType,
        secondary: SecondaryType,
    ) -> Result<Vec<String>, StoreError> {
        let primary_pool = self.move_pool(primary.as_str()).await?;
        let secondary_pool = match secondary.element() {
            Some(element) => self.move_pool(element.as_str()).await?,
            None => primary_pool.clone(),
        };

        if primary_pool.is_empty() && secondary_pool.is_empty() {
            warn!(%primary, %secondary, "no catalog moves for either type");
        }

        let mut ids = self.selector.pick(&primary_pool, MOVES_PER_POOL);
        for id in self.selector.pick(&secondary_pool, MOVES_PER_POOL) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    async fn move_pool(&self, element: &str) -> Result<Vec<String>, StoreError> {
        let docs = self
            .paginator
            .get_documents_by_field(MOVES_COLLECTION, "type", &RawValue::from(element))
            .await?;
        Ok(docs.iter().filter_map(|doc| document_mapper::optional_string(doc, "id")).collect())
    }
}

fn decode_photo(photo_base64: &str) -> Result<Vec<u8>, GenerationError> {
    let trimmed = PHOTO_PREFIXES
        .iter()
        .find_map(|prefix| photo_base64.strip_prefix(prefix))
        .unwrap_or(photo_base64);
    BASE64
        .decode(trimmed)
        .map_err(|err| GenerationError::InvalidPhoto(err.to_string()))
}
