//! Document mapper - coercion from raw stored documents into typed fields
//!
//! The document store round-trips loosely-typed values: a whole number may
//! come back as an integer or a float depending on the driver, arrays may
//! be homogeneous or not, and older documents may miss fields entirely.
//! Every function here is total and pure: a missing, null, or
//! wrongly-typed field maps to `None`, never to an error and never to a
//! zero/empty default.

use crate::domain::entities::Creature;
use crate::domain::value_objects::{ElementType, RawDocument, RawValue, SecondaryType};

/// Integer field. Accepts integer and float encodings of the same logical
/// value; floats truncate toward zero.
pub fn optional_int(doc: &RawDocument, field: &str) -> Option<i64> {
    match doc.get(field)? {
        RawValue::Int(v) => Some(*v),
        RawValue::Float(v) => Some(*v as i64),
        _ => None,
    }
}

/// String field.
pub fn optional_string(doc: &RawDocument, field: &str) -> Option<String> {
    match doc.get(field)? {
        RawValue::Str(v) => Some(v.clone()),
        _ => None,
    }
}

/// String-array field. Accepts any array, silently skipping non-string
/// elements; a non-array value maps to `None`.
pub fn optional_string_array(doc: &RawDocument, field: &str) -> Option<Vec<String>> {
    match doc.get(field)? {
        RawValue::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    }
}

/// Stat field: non-negative integer. A stored negative value is treated as
/// absent, keeping the entity invariant that stats are present-and-valid
/// or missing.
pub fn optional_stat(doc: &RawDocument, field: &str) -> Option<u32> {
    optional_int(doc, field).and_then(|v| u32::try_from(v).ok())
}

/// Elemental type field, parsed tolerantly.
pub fn optional_element(doc: &RawDocument, field: &str) -> Option<ElementType> {
    optional_string(doc, field).and_then(|v| ElementType::parse(&v))
}

/// Secondary type field (element or the `none` sentinel), parsed tolerantly.
pub fn optional_secondary(doc: &RawDocument, field: &str) -> Option<SecondaryType> {
    optional_string(doc, field).and_then(|v| SecondaryType::parse(&v))
}

/// Map a stored document's scalar fields into a [`Creature`].
///
/// Pure: asset URLs stay unresolved and the move list stays empty; both
/// require collaborators and belong to enrichment.
pub fn creature_fields(doc: &RawDocument) -> Creature {
    Creature {
        id: optional_string(doc, "id"),
        name: optional_string(doc, "name"),
        description: optional_string(doc, "description"),
        primary_type: optional_element(doc, "primaryType"),
        secondary_type: optional_secondary(doc, "secondaryType"),
        original_image_url: None,
        generated_image_url: None,
        height: optional_stat(doc, "height"),
        weight: optional_stat(doc, "weight"),
        strength: optional_stat(doc, "strength"),
        toughness: optional_stat(doc, "toughness"),
        agility: optional_stat(doc, "agility"),
        arcana: optional_stat(doc, "arcana"),
        aura: optional_stat(doc, "aura"),
        charisma: optional_stat(doc, "charisma"),
        intimidation: optional_stat(doc, "intimidation"),
        endurance: optional_stat(doc, "endurance"),
        luck: optional_stat(doc, "luck"),
        moves: Vec::new(),
    }
}
