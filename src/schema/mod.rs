//! Field schemas
//!
//! Static descriptions of the mappable fields of one operation: where each
//! field lives in the destination tree, what shape its value takes, which
//! alternate names address it, and whether it is nominally required.
//! Schema sets are defined once per operation and shared immutably.

pub mod path;

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use path::FieldPath;

/// The declared shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// A single scalar (string, integer, float, or bool).
    Scalar,
    /// A list of scalars.
    List,
    /// A map whose entries are scalars.
    ScalarMap,
    /// A map whose entries are themselves maps.
    NestedMap,
    /// A sub-record: a map whose entries become interior children,
    /// recursively.
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Scalar => "scalar",
            ValueKind::List => "list",
            ValueKind::ScalarMap => "scalar-map",
            ValueKind::NestedMap => "nested-map",
            ValueKind::Record => "record",
        };
        write!(f, "{}", name)
    }
}

/// Static descriptor of one mappable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Canonical location in the destination tree. The dotted rendering is
    /// also the canonical input name.
    pub path: FieldPath,

    /// Full alternate names a caller may use instead of the canonical one,
    /// in declaration order. Input-only: output always uses the canonical
    /// name.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Declared value shape.
    pub kind: ValueKind,

    /// Nominally required. Enforcement is advisory unless the embedding
    /// caller escalates it.
    #[serde(default)]
    pub required: bool,
}

impl FieldSchema {
    pub fn new(path: FieldPath, kind: ValueKind) -> Self {
        Self {
            path,
            aliases: Vec::new(),
            kind,
            required: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The canonical input name followed by the aliases, in resolution
    /// order.
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.path.dotted()).chain(self.aliases.iter().cloned())
    }
}

/// A validated, declaration-ordered collection of field schemas.
///
/// Construction enforces the two schema-level invariants: canonical names
/// and aliases are together unique (no input name may resolve to two
/// paths), and no canonical path is a strict prefix of another (a field
/// cannot sit inside another field's leaf position).
#[derive(Debug, Clone)]
pub struct SchemaSet {
    fields: Vec<FieldSchema>,
    names: HashMap<String, usize>,
}

impl SchemaSet {
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        let mut names: HashMap<String, usize> = HashMap::new();

        for (index, field) in fields.iter().enumerate() {
            for name in field.names() {
                if let Some(&previous) = names.get(&name) {
                    return Err(SchemaError::DuplicateName {
                        name,
                        first: fields[previous].path.clone(),
                        second: field.path.clone(),
                    });
                }
                names.insert(name, index);
            }
        }

        for field in &fields {
            for other in &fields {
                if field.path.is_prefix_of(&other.path) {
                    return Err(SchemaError::OverlappingPaths {
                        path: field.path.clone(),
                        other: other.path.clone(),
                    });
                }
            }
        }

        Ok(Self { fields, names })
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Resolve an input name (canonical or alias) to its field.
    pub fn resolve_name(&self, name: &str) -> Option<&FieldSchema> {
        self.names.get(name).map(|&index| &self.fields[index])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
