//! Generator ports - the external vision and image generation providers

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::value_objects::{ElementType, SecondaryType};

/// Errors from the generation providers.
///
/// `ProviderUnavailable` keeps the raw status and body for diagnostics;
/// `MalformedResponse` and `SchemaViolation` name the offending nesting
/// level or field so callers (and tests) can assert precisely.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("provider request failed with status {status}: {body}")]
    ProviderUnavailable { status: u16, body: String },
    #[error("malformed provider response: {detail}")]
    MalformedResponse { detail: String },
    #[error("generated payload violates the profile schema: {detail}")]
    SchemaViolation { detail: String },
    #[error("transport error: {0}")]
    Transport(String),
}

impl GeneratorError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse { detail: detail.into() }
    }
}

/// The structured creature profile produced by the vision generator.
///
/// Field names match the strict JSON schema sent with the request; the
/// provider is instructed to return exactly this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureProfile {
    pub name: String,
    pub description: String,
    pub image_generation_prompt: String,
    pub photo_object: String,
    pub primary_type: ElementType,
    pub secondary_type: SecondaryType,
    pub height: i64,
    pub weight: i64,
    pub strength: i64,
    pub toughness: i64,
    pub agility: i64,
    pub arcana: i64,
    pub aura: i64,
    pub charisma: i64,
    pub intimidation: i64,
    pub endurance: i64,
    pub luck: i64,
}

/// Artwork returned by an image generation provider.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    /// MIME type for the blob write, e.g. `image/webp`.
    pub content_type: String,
    /// Filename extension matching the content type, e.g. `webp`.
    pub file_extension: String,
}

/// Port for the text/vision generator: photo in, structured profile out.
#[async_trait]
pub trait VisionGeneratorPort: Send + Sync {
    async fn generate_profile(&self, photo_base64: &str)
        -> Result<CreatureProfile, GeneratorError>;
}

/// Port for the image generator: prompt in, artwork bytes out.
#[async_trait]
pub trait ImageGeneratorPort: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GeneratorError>;
}

/// Port for bearer-token acquisition where a provider needs one.
/// Credential mechanics (service accounts, refresh) are a host concern.
#[async_trait]
pub trait TokenProviderPort: Send + Sync {
    async fn access_token(&self) -> Result<String, anyhow::Error>;
}
