//! Value objects - Immutable objects defined by their attributes

mod element;
mod raw_document;

pub use element::{ElementType, SecondaryType};
pub use raw_document::{RawDocument, RawValue};
