//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles, accepting its
//! outbound ports as dependencies and returning domain entities.

pub mod collection_service;
pub mod document_mapper;
pub mod enrichment;
pub mod generation_service;
pub mod move_selector;
pub mod paginator;

pub use collection_service::{CollectionService, CreaturePage};
pub use generation_service::{GenerationError, GenerationService};
pub use move_selector::MoveSelector;
pub use paginator::{CollectionPaginator, DocumentPage};
