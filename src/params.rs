//! Flat parameter sets
//!
//! The caller-facing, non-nested collection of named optional values.
//! Presence is three-state and explicit: a name is either absent, set with a
//! value, or explicitly unset (the latter two are distinguished from a
//! default-value sentinel so that an explicitly provided empty list, zero,
//! or false is still "provided").

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tagged optional value: explicitly provided or not.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ParameterValue {
    #[default]
    Unset,
    Set(Value),
}

impl ParameterValue {
    pub fn is_set(&self) -> bool {
        matches!(self, ParameterValue::Set(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ParameterValue::Set(value) => Some(value),
            ParameterValue::Unset => None,
        }
    }
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        ParameterValue::Set(value)
    }
}

/// A flat, name-addressed parameter set.
///
/// Names are exact strings matched against canonical dotted paths and
/// aliases; the engine does not care how they were collected. A missing
/// name and an explicitly `Unset` name behave identically on lookup.
#[derive(Debug, Clone, Default)]
pub struct FlatParams {
    values: BTreeMap<String, ParameterValue>,
}

impl FlatParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value under `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values
            .insert(name.into(), ParameterValue::Set(value.into()));
    }

    /// Record `name` as explicitly unset. Lookup-equivalent to leaving the
    /// name out entirely.
    pub fn unset(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), ParameterValue::Unset);
    }

    /// Chaining form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> &ParameterValue {
        self.values.get(name).unwrap_or(&ParameterValue::Unset)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_set()
    }

    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.get(name).as_value()
    }

    /// Iterate the entries that are actually set, in name order.
    pub fn set_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().filter_map(|(name, value)| {
            value.as_value().map(|v| (name.as_str(), v))
        })
    }

    /// Number of set entries.
    pub fn set_count(&self) -> usize {
        self.values.values().filter(|v| v.is_set()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

impl FromIterator<(String, ParameterValue)> for FlatParams {
    fn from_iter<T: IntoIterator<Item = (String, ParameterValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
