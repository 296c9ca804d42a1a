//! Outbound ports - Interfaces that the application requires from external systems

mod blob_store_port;
mod document_store_port;
mod generator_port;

pub use blob_store_port::{BlobError, BlobStorePort};
pub use document_store_port::{DocumentStorePort, PageCursor, SortDirection, StoreError};
pub use generator_port::{
    CreatureProfile, GeneratedImage, GeneratorError, ImageGeneratorPort, TokenProviderPort,
    VisionGeneratorPort,
};
