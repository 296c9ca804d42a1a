//! Creature entity - the public result of generation and listing

use serde::Serialize;

use crate::domain::value_objects::{ElementType, SecondaryType};

use super::Move;

/// A creature as returned to callers.
///
/// Creatures are reconstructed from stored documents on every read; the
/// document store is free to hold partially-populated documents (older
/// schema generations, interrupted writers), so every descriptive field and
/// every stat is independently optional. An absent stat means "not yet
/// computed" - a zero is a real value, never a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<ElementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_type: Option<SecondaryType>,

    /// Resolved download URL for the submitted photo.
    #[serde(rename = "originalImageDownloadUrl", skip_serializing_if = "Option::is_none")]
    pub original_image_url: Option<String>,
    /// Resolved download URL for the generated artwork.
    #[serde(rename = "generatedImageDownloadUrl", skip_serializing_if = "Option::is_none")]
    pub generated_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toughness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agility: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arcana: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aura: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charisma: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intimidation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endurance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luck: Option<u32>,

    /// Moves in stored `moveIds` order.
    pub moves: Vec<Move>,
}
