//! Configuration System
//!
//! Declarative schema-set definitions loaded from TOML files (one file per
//! operation), plus the engine-level settings record. Schema files keep
//! the field descriptions as data rather than code, so operations differ
//! only in what they declare, never in how they map.
//!
//! ```toml
//! operation = "CreateCluster"
//!
//! [[field]]
//! path = "Name"
//! kind = "scalar"
//! required = true
//!
//! [[field]]
//! path = "Vpc.Subnets"
//! kind = "list"
//! aliases = ["SubnetIds"]
//! ```

use crate::error::SchemaError;
use crate::logging::LoggingConfig;
use crate::schema::path::FieldPath;
use crate::schema::{FieldSchema, SchemaSet, ValueKind};
use crate::validate::RequiredPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One field entry of a schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Canonical dotted path.
    pub path: String,

    /// Declared value shape.
    pub kind: ValueKind,

    /// Alternate input names, in resolution order.
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub required: bool,
}

/// A declarative schema-set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Optional operation label, for diagnostics only.
    pub operation: Option<String>,

    /// Field declarations, in declaration order.
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,
}

impl SchemaFile {
    /// Validate the file's entries into a usable schema set.
    pub fn into_schema_set(self) -> Result<SchemaSet, SchemaError> {
        let mut fields = Vec::with_capacity(self.fields.len());
        for entry in self.fields {
            let path = FieldPath::parse(&entry.path)?;
            let mut field = FieldSchema::new(path, entry.kind);
            field.aliases = entry.aliases;
            field.required = entry.required;
            fields.push(field);
        }
        SchemaSet::new(fields)
    }
}

/// Parse a schema set from TOML text.
pub fn parse_schema_toml(input: &str) -> Result<SchemaSet, SchemaError> {
    let file: SchemaFile = toml::from_str(input)?;
    let operation = file.operation.clone();
    let set = file.into_schema_set()?;
    debug!(
        operation = operation.as_deref().unwrap_or("<unnamed>"),
        fields = set.len(),
        "schema set loaded"
    );
    Ok(set)
}

/// Load a schema set from a TOML file on disk.
pub fn load_schema_file(path: &Path) -> Result<SchemaSet, SchemaError> {
    let contents = std::fs::read_to_string(path)?;
    parse_schema_toml(&contents)
}

/// Engine-level settings for embedders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// How missing required fields are treated.
    #[serde(default)]
    pub required: RequiredPolicy,
}
