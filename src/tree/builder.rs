//! Tree builder for weaving flat parameter sets into request trees
//!
//! For each schema field the builder resolves a value through the field's
//! names (canonical first, then aliases in declaration order), kind-checks
//! it, and attaches it at the field's path, reusing interior nodes for
//! shared prefixes. The finished tree is collapsed bottom-up so no empty
//! interior node survives, including at the root.

use crate::error::MapError;
use crate::params::FlatParams;
use crate::schema::path::FieldPath;
use crate::schema::{FieldSchema, SchemaSet, ValueKind};
use crate::tree::collapse::collapse;
use crate::tree::node::Node;
use crate::value::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// Builds request trees for one schema set.
pub struct TreeBuilder<'a> {
    schema: &'a SchemaSet,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(schema: &'a SchemaSet) -> Self {
        Self { schema }
    }

    /// Build the request tree for `params`.
    ///
    /// Returns `Ok(None)` when nothing relevant was set: an entirely-unset
    /// parameter set yields an absent root, not an empty record. The
    /// parameter set is not mutated.
    #[instrument(skip_all, fields(schema_fields = self.schema.len(), set = params.set_count()))]
    pub fn build(&self, params: &FlatParams) -> Result<Option<Node>, MapError> {
        let mut root: BTreeMap<String, Node> = BTreeMap::new();
        let mut resolved = 0usize;

        for field in self.schema.fields() {
            let value = match resolve_field(field, params)? {
                Some(value) => value,
                None => continue,
            };
            trace!(path = %field.path, kind = %field.kind, "resolved field");
            let node = node_for_kind(field, value)?;
            insert_at_path(&mut root, field.path.segments(), node);
            resolved += 1;
        }

        let tree = collapse(Node::Interior(root));
        debug!(
            resolved,
            kept_leaves = tree.as_ref().map(Node::leaf_count).unwrap_or(0),
            "request tree built"
        );
        Ok(tree)
    }
}

/// Resolve a field's value from the flat set.
///
/// Every provided name addressing the field is noted; more than one is a
/// caller error regardless of whether the values agree, so the engine never
/// silently picks between canonical and alias spellings.
fn resolve_field<'p>(
    field: &FieldSchema,
    params: &'p FlatParams,
) -> Result<Option<&'p Value>, MapError> {
    let mut provided: Vec<(String, &Value)> = Vec::new();
    for name in field.names() {
        if let Some(value) = params.value_of(&name) {
            provided.push((name, value));
        }
    }

    match provided.len() {
        0 => Ok(None),
        1 => Ok(Some(provided[0].1)),
        _ => Err(MapError::ConflictingAlias {
            path: field.path.clone(),
            names: provided.into_iter().map(|(name, _)| name).collect(),
        }),
    }
}

/// Kind-check a resolved value and convert it into its node form.
fn node_for_kind(field: &FieldSchema, value: &Value) -> Result<Node, MapError> {
    match (field.kind, value) {
        (ValueKind::Scalar, Value::Scalar(_)) | (ValueKind::List, Value::List(_)) => {
            Ok(Node::Leaf(value.clone()))
        }
        (ValueKind::ScalarMap, Value::Map(entries)) => {
            let mut children = BTreeMap::new();
            for (key, entry) in entries {
                match entry {
                    Value::Scalar(_) => {
                        children.insert(key.clone(), Node::Leaf(entry.clone()));
                    }
                    other => {
                        return Err(MapError::MapEntryMismatch {
                            path: field.path.clone(),
                            key: key.clone(),
                            expected: "scalar",
                            found: other.kind_name(),
                        })
                    }
                }
            }
            Ok(Node::Interior(children))
        }
        (ValueKind::NestedMap, Value::Map(entries)) => {
            let mut children = BTreeMap::new();
            for (key, entry) in entries {
                match entry {
                    Value::Map(inner) => {
                        children.insert(key.clone(), record_subtree(&field.path, inner)?);
                    }
                    other => {
                        return Err(MapError::MapEntryMismatch {
                            path: field.path.clone(),
                            key: key.clone(),
                            expected: "map",
                            found: other.kind_name(),
                        })
                    }
                }
            }
            Ok(Node::Interior(children))
        }
        (ValueKind::Record, Value::Map(entries)) => record_subtree(&field.path, entries),
        (kind, other) => Err(MapError::TypeMismatch {
            path: field.path.clone(),
            expected: expected_shape(kind),
            found: other.kind_name(),
        }),
    }
}

/// Recursively convert a record map into an interior subtree: scalar and
/// list entries become leaves, map entries recurse.
fn record_subtree(path: &FieldPath, entries: &BTreeMap<String, Value>) -> Result<Node, MapError> {
    let mut children = BTreeMap::new();
    for (key, entry) in entries {
        let child = match entry {
            Value::Scalar(_) | Value::List(_) => Node::Leaf(entry.clone()),
            Value::Map(inner) => record_subtree(path, inner)?,
        };
        children.insert(key.clone(), child);
    }
    Ok(Node::Interior(children))
}

fn expected_shape(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Scalar => "scalar",
        ValueKind::List => "list",
        ValueKind::ScalarMap | ValueKind::NestedMap | ValueKind::Record => "map",
    }
}

/// Attach `node` at `segments`, creating interior nodes along the way and
/// reusing ones created for shared path prefixes.
fn insert_at_path(children: &mut BTreeMap<String, Node>, segments: &[String], node: Node) {
    match segments {
        [] => {}
        [last] => {
            children.insert(last.clone(), node);
        }
        [head, rest @ ..] => {
            let child = children
                .entry(head.clone())
                .or_insert_with(Node::interior);
            // Schema validation rejects overlapping canonical paths, so an
            // existing child on the way down is always interior.
            if let Node::Interior(grandchildren) = child {
                insert_at_path(grandchildren, rest, node);
            }
        }
    }
}
