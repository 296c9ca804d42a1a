//! Raw documents - the variant-value representation at the storage boundary
//!
//! The document store speaks in loosely-typed documents. Rather than letting
//! `serde_json::Value` (or worse, provider-specific row types) leak through
//! the application, everything that crosses the store port is a
//! [`RawDocument`]: an ordered string-keyed map of [`RawValue`] variants.
//! All coercion back into typed entities goes through the document mapper.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single loosely-typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<RawValue>),
    Map(RawDocument),
}

impl RawValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        Self::Array(value.into_iter().map(RawValue::Str).collect())
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::Array(items.into_iter().map(RawValue::from).collect()),
            Value::Object(map) => Self::Map(RawDocument::from_json_map(map)),
        }
    }
}

impl From<&RawValue> for Value {
    fn from(value: &RawValue) -> Self {
        match value {
            RawValue::Null => Value::Null,
            RawValue::Bool(b) => Value::Bool(*b),
            RawValue::Int(i) => Value::from(*i),
            RawValue::Float(f) => {
                serde_json::Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null)
            }
            RawValue::Str(s) => Value::String(s.clone()),
            RawValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            RawValue::Map(doc) => doc.to_json(),
        }
    }
}

/// An ordered, string-keyed document as stored in (or read from) the
/// document store. Ordering is deterministic so documents compare and log
/// stably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument(BTreeMap<String, RawValue>);

impl RawDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style insert, used when composing documents for persistence.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_json_map(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().map(|(k, v)| (k, RawValue::from(v))).collect())
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.iter().map(|(k, v)| (k.clone(), Value::from(v))).collect())
    }
}

impl From<Value> for RawDocument {
    /// Converts a JSON value into a document. Non-object values produce an
    /// empty document; store payloads are always objects.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_json_map(map),
            _ => Self::new(),
        }
    }
}
