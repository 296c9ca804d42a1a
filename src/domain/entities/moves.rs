//! Move entity - a catalog battle ability referenced by creatures

use serde::Serialize;

use crate::domain::value_objects::ElementType;

/// A battle move from the shared catalog collection.
///
/// Moves are immutable once created and referenced by id from creature
/// documents. Catalog content drifts over time, so a referenced move may no
/// longer exist; enrichment simply omits it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementType>,
}
