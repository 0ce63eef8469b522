//! Required-field validation
//!
//! Presence checks over the schema entries marked required, using the same
//! alias resolution the tree builder uses. Advisory by default: the
//! surrounding system prefers to attempt the downstream call and let the
//! transport collaborator reject it authoritatively, so missing fields are
//! collected and logged rather than aborting. Embedders can escalate to a
//! fatal policy, which fails fast on the first missing field in schema
//! declaration order.

use crate::error::MapError;
use crate::params::FlatParams;
use crate::schema::path::FieldPath;
use crate::schema::SchemaSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A missing nominally-required field, named by its canonical path
/// regardless of which alias the caller might have used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredWarning {
    pub path: FieldPath,
}

impl fmt::Display for RequiredWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field: {}", self.path)
    }
}

/// How missing required fields are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredPolicy {
    /// Collect warnings and proceed.
    #[default]
    Advisory,
    /// Abort on the first missing field in declaration order.
    Fatal,
}

/// Collect the missing required fields, in schema declaration order.
///
/// A field is satisfied when any of its names (canonical or alias) is set;
/// conflicting simultaneous spellings are the builder's concern, not the
/// validator's.
pub fn validate_required(schema: &SchemaSet, params: &FlatParams) -> Vec<RequiredWarning> {
    schema
        .fields()
        .iter()
        .filter(|field| field.required)
        .filter(|field| !field.names().any(|name| params.is_set(&name)))
        .map(|field| RequiredWarning {
            path: field.path.clone(),
        })
        .collect()
}

/// Validate and apply `policy`.
///
/// Advisory: every warning is logged and returned, the invocation proceeds.
/// Fatal: the first missing field becomes [`MapError::MissingRequired`].
pub fn enforce_required(
    schema: &SchemaSet,
    params: &FlatParams,
    policy: RequiredPolicy,
) -> Result<Vec<RequiredWarning>, MapError> {
    let warnings = validate_required(schema, params);
    match policy {
        RequiredPolicy::Advisory => {
            for warning in &warnings {
                warn!(path = %warning.path, "missing required field");
            }
            Ok(warnings)
        }
        RequiredPolicy::Fatal => match warnings.into_iter().next() {
            Some(first) => Err(MapError::MissingRequired { path: first.path }),
            None => Ok(Vec::new()),
        },
    }
}
