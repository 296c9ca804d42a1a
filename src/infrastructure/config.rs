//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Which image generation provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProvider {
    Replicate,
    Vertex,
}

impl ImageProvider {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "replicate" => Ok(Self::Replicate),
            "vertex" => Ok(Self::Vertex),
            other => anyhow::bail!("unknown IMAGE_PROVIDER `{other}` (replicate | vertex)"),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenAI-compatible chat-completions base URL
    pub openai_base_url: String,
    /// API key for the vision provider
    pub openai_api_key: String,
    /// Vision model name
    pub openai_model: String,

    /// Selected image generation provider
    pub image_provider: ImageProvider,
    /// Replicate API base URL
    pub replicate_base_url: String,
    /// Replicate API token (required when the provider is Replicate)
    pub replicate_api_token: Option<String>,
    /// Google Cloud project id (required when the provider is Vertex)
    pub google_project_id: Option<String>,
    /// Imagen model name
    pub imagen_model: String,
    /// Regions serving the Imagen model; empty means the built-in default set
    pub imagen_regions: Vec<String>,

    /// Bucket holding original photos and generated artwork
    pub storage_bucket: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Pick up a local .env file when present
        dotenvy::dotenv().ok();

        let image_provider = ImageProvider::parse(
            &env::var("IMAGE_PROVIDER").unwrap_or_else(|_| "replicate".to_string()),
        )?;

        let replicate_api_token = env::var("REPLICATE_API_TOKEN").ok();
        let google_project_id = env::var("GOOGLE_CLOUD_PROJECT_ID").ok();

        match image_provider {
            ImageProvider::Replicate => {
                replicate_api_token
                    .as_ref()
                    .context("REPLICATE_API_TOKEN is required when IMAGE_PROVIDER=replicate")?;
            }
            ImageProvider::Vertex => {
                google_project_id
                    .as_ref()
                    .context("GOOGLE_CLOUD_PROJECT_ID is required when IMAGE_PROVIDER=vertex")?;
            }
        }

        Ok(Self {
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY environment variable is required")?,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),

            image_provider,
            replicate_base_url: env::var("REPLICATE_BASE_URL")
                .unwrap_or_else(|_| "https://api.replicate.com".to_string()),
            replicate_api_token,
            google_project_id,
            imagen_model: env::var("IMAGEN_MODEL")
                .unwrap_or_else(|_| "imagen-3.0-generate-001".to_string()),
            imagen_regions: env::var("IMAGEN_REGIONS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|region| !region.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),

            storage_bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "critterforge.appspot.com".to_string()),
        })
    }
}
