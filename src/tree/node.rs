//! Tree nodes
//!
//! A node is either a leaf holding a provided value or an interior node
//! holding named children. Children are kept in a `BTreeMap` so trees
//! compare, serialize, and display deterministically.

use crate::error::MapError;
use crate::schema::path::FieldPath;
use crate::value::{ScalarValue, Value};
use std::collections::BTreeMap;

/// One element of a request or response tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A resolved value at its final position.
    Leaf(Value),
    /// A named sub-record.
    Interior(BTreeMap<String, Node>),
}

impl Node {
    /// An interior node with no children yet.
    pub fn interior() -> Node {
        Node::Interior(BTreeMap::new())
    }

    pub fn leaf(value: impl Into<Value>) -> Node {
        Node::Leaf(value.into())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Walk the tree following `path`; `None` if any segment is missing or
    /// the walk runs through a leaf.
    pub fn get(&self, path: &FieldPath) -> Option<&Node> {
        let mut current = self;
        for segment in path.segments() {
            match current {
                Node::Interior(children) => {
                    current = children.get(segment)?;
                }
                Node::Leaf(_) => return None,
            }
        }
        Some(current)
    }

    /// Collapse the node into a plain [`Value`]: leaves yield their value,
    /// interior nodes a map of their children's values.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Leaf(value) => value.clone(),
            Node::Interior(children) => Value::Map(
                children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.to_value()))
                    .collect(),
            ),
        }
    }

    /// Render the tree as the opaque JSON payload handed to a transport
    /// collaborator.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Node::Leaf(value) => value.to_json(),
            Node::Interior(children) => serde_json::Value::Object(
                children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.to_json()))
                    .collect(),
            ),
        }
    }

    /// Build a response tree from a transport payload.
    ///
    /// Objects become interior nodes and their null entries are dropped;
    /// scalars and scalar arrays become leaves. Arrays with non-scalar
    /// elements are not part of the tree shape and are rejected.
    pub fn from_json(payload: &serde_json::Value) -> Result<Node, MapError> {
        match payload {
            serde_json::Value::Object(entries) => {
                let mut children = BTreeMap::new();
                for (name, entry) in entries {
                    if entry.is_null() {
                        continue;
                    }
                    children.insert(name.clone(), Node::from_json(entry)?);
                }
                Ok(Node::Interior(children))
            }
            serde_json::Value::Array(items) => {
                let scalars: Option<Vec<ScalarValue>> =
                    items.iter().map(ScalarValue::from_json).collect();
                match scalars {
                    Some(items) => Ok(Node::Leaf(Value::List(items))),
                    None => Err(MapError::UnsupportedPayload {
                        detail: "array with non-scalar elements".to_string(),
                    }),
                }
            }
            serde_json::Value::Null => Err(MapError::UnsupportedPayload {
                detail: "null at tree position".to_string(),
            }),
            other => match ScalarValue::from_json(other) {
                Some(scalar) => Ok(Node::Leaf(Value::Scalar(scalar))),
                None => Err(MapError::UnsupportedPayload {
                    detail: format!("unrepresentable value {}", other),
                }),
            },
        }
    }

    /// Count of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Interior(children) => children.values().map(Node::leaf_count).sum(),
        }
    }
}
