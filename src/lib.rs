//! Critterforge - photo-to-creature generation and collection backend
//!
//! The engine behind a collectible-creature mobile game:
//! - Turns a submitted photo into a persisted creature: a vision model
//!   invents the creature, an image model draws it, both assets land in
//!   blob storage, and the composite document is persisted.
//! - Serves paginated, enriched listings of a user's creatures.
//!
//! The HTTP surface, credential loading, and the concrete blob/document
//! store drivers are host concerns: the host implements the outbound
//! ports in [`application::ports::outbound`] and calls
//! [`GenerationService::process`] and [`CollectionService::fetch`].
//!
//! ```ignore
//! use std::sync::Arc;
//! use critterforge::application::services::{CollectionService, GenerationService, MoveSelector};
//! use critterforge::infrastructure::config::AppConfig;
//! use critterforge::infrastructure::generators::{OpenAiVisionClient, ReplicateImageClient};
//!
//! let config = AppConfig::from_env()?;
//! let vision = OpenAiVisionClient::new(
//!     &config.openai_base_url,
//!     &config.openai_api_key,
//!     &config.openai_model,
//! );
//! let artwork = ReplicateImageClient::new(
//!     &config.replicate_base_url,
//!     config.replicate_api_token.clone().unwrap(),
//! );
//! // blob_store and doc_store are the host's port implementations
//! let generation = GenerationService::new(
//!     vision, artwork, blob_store, doc_store, MoveSelector::new(), config.storage_bucket,
//! );
//! let creature = generation.process(&photo_base64, &user_id).await?;
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::{CollectionService, GenerationService};
pub use domain::entities::{Creature, Move};
