//! Error types for the parameter mapping engine.

use crate::schema::path::FieldPath;
use thiserror::Error;

/// Errors raised while defining or loading a schema set.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("field path is empty")]
    EmptyPath,

    #[error("field path {path:?} contains an empty segment")]
    EmptySegment { path: String },

    #[error("name {name:?} resolves to both {first} and {second}")]
    DuplicateName {
        name: String,
        first: FieldPath,
        second: FieldPath,
    },

    #[error("canonical path {path} overlaps canonical path {other}")]
    OverlappingPaths { path: FieldPath, other: FieldPath },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("schema file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("schema file parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised while building a request tree or projecting a response.
///
/// Structural errors (`ConflictingAlias`, the type mismatches) always abort
/// the current invocation; `MissingRequired` is raised only when the caller
/// escalates required-field enforcement to fatal. Every message names the
/// canonical dotted path, never an alias.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("conflicting parameter aliases for {path}: {}", .names.join(", "))]
    ConflictingAlias { path: FieldPath, names: Vec<String> },

    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("type mismatch at {path} (key {key:?}): expected {expected}, found {found}")]
    MapEntryMismatch {
        path: FieldPath,
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required field: {path}")]
    MissingRequired { path: FieldPath },

    #[error("unsupported payload value: {detail}")]
    UnsupportedPayload { detail: String },
}
