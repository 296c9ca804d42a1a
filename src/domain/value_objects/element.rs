//! Elemental types - the closed affinity enumeration for creatures and moves

use serde::{Deserialize, Serialize};

/// A creature's elemental affinity.
///
/// The set is closed: the generator schema, the moves catalog, and stored
/// documents all draw from these seven values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Flame,
    Tide,
    Stone,
    Bloom,
    Spark,
    Phantom,
    Fury,
}

impl ElementType {
    /// Every element, in schema order.
    pub const ALL: [ElementType; 7] = [
        Self::Flame,
        Self::Tide,
        Self::Stone,
        Self::Bloom,
        Self::Spark,
        Self::Phantom,
        Self::Fury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flame => "Flame",
            Self::Tide => "Tide",
            Self::Stone => "Stone",
            Self::Bloom => "Bloom",
            Self::Spark => "Spark",
            Self::Phantom => "Phantom",
            Self::Fury => "Fury",
        }
    }

    /// Case-insensitive parse. Returns `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A creature's secondary affinity: an element, or the `none` sentinel for
/// single-typed creatures. The sentinel is a real stored value, distinct
/// from the field being absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryType {
    None,
    Element(ElementType),
}

impl SecondaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Element(e) => e.as_str(),
        }
    }

    /// Case-insensitive parse of an element name or the `none` sentinel.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Some(Self::None);
        }
        ElementType::parse(value).map(Self::Element)
    }

    pub fn element(&self) -> Option<ElementType> {
        match self {
            Self::None => None,
            Self::Element(e) => Some(*e),
        }
    }
}

impl std::fmt::Display for SecondaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SecondaryType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SecondaryType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown secondary type `{value}`"))
        })
    }
}
