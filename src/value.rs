//! Parameter values
//!
//! The shapes a caller may supply for a single field: scalars, lists of
//! scalars, and string-keyed maps. Values convert losslessly to and from
//! `serde_json::Value` so a finished tree can travel as an opaque payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single scalar: string, integer, float, or bool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ScalarValue {
    /// Whether this scalar is the type's zero-equivalent (`false`, `0`,
    /// `0.0`, `""`). An explicitly provided zero-equivalent is still a set
    /// value and never collapses.
    pub fn is_zero_equivalent(&self) -> bool {
        match self {
            ScalarValue::Bool(b) => !b,
            ScalarValue::Int(i) => *i == 0,
            ScalarValue::Float(f) => *f == 0.0,
            ScalarValue::Str(s) => s.is_empty(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ScalarValue::Bool(b) => serde_json::Value::Bool(*b),
            ScalarValue::Int(i) => serde_json::Value::from(*i),
            ScalarValue::Float(f) => serde_json::Value::from(*f),
            ScalarValue::Str(s) => serde_json::Value::String(s.clone()),
        }
    }

    /// Convert a JSON scalar. Returns `None` for null, arrays, and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<ScalarValue> {
        match value {
            serde_json::Value::Bool(b) => Some(ScalarValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(ScalarValue::Int(i))
                } else {
                    n.as_f64().map(ScalarValue::Float)
                }
            }
            serde_json::Value::String(s) => Some(ScalarValue::Str(s.clone())),
            _ => None,
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Str(value)
    }
}

/// A caller-supplied value: scalar, list of scalars, or string-keyed map.
///
/// Map values cover the map-of-scalar, map-of-map, and sub-record field
/// kinds; the declared kind decides how the map is checked and placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(ScalarValue),
    List(Vec<ScalarValue>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Short shape name used in type-mismatch messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(s) => s.to_json(),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(ScalarValue::to_json).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Convenience constructor for a string scalar.
    pub fn string(value: impl Into<String>) -> Value {
        Value::Scalar(ScalarValue::Str(value.into()))
    }

    /// Convenience constructor for a list of string scalars.
    pub fn string_list<I, S>(items: I) -> Value
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(
            items
                .into_iter()
                .map(|s| ScalarValue::Str(s.into()))
                .collect(),
        )
    }
}

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        Value::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(ScalarValue::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(ScalarValue::Int(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(ScalarValue::Str(value.to_string()))
    }
}

impl From<Vec<ScalarValue>> for Value {
    fn from(items: Vec<ScalarValue>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}
