//! Tree flattening
//!
//! The inverse walk: project selected paths of a populated response tree
//! back out as a flat parameter set, or hand the whole tree through
//! unchanged. The two modes are explicit and never merged, because
//! whole-tree passthrough must preserve nested structure for consumers
//! that want it.

use crate::params::FlatParams;
use crate::schema::path::FieldPath;
use crate::schema::SchemaSet;
use crate::tree::node::Node;
use tracing::debug;

/// What to project out of a response tree.
#[derive(Debug, Clone)]
pub enum Projection {
    /// Flatten the listed paths into named output values.
    Paths(Vec<FieldPath>),
    /// Return the tree unchanged as one opaque value.
    WholeTree,
}

/// The result of a projection.
#[derive(Debug, Clone)]
pub enum Projected {
    Values(FlatParams),
    Tree(Node),
}

/// Project `tree` according to `projection`.
pub fn project(tree: &Node, projection: &Projection) -> Projected {
    match projection {
        Projection::Paths(paths) => Projected::Values(flatten_paths(tree, paths)),
        Projection::WholeTree => Projected::Tree(tree.clone()),
    }
}

/// Flatten every canonical path of `schema` out of `tree`.
pub fn flatten(tree: &Node, schema: &SchemaSet) -> FlatParams {
    let paths: Vec<FieldPath> = schema.fields().iter().map(|f| f.path.clone()).collect();
    flatten_paths(tree, &paths)
}

/// Flatten the requested paths out of `tree`.
///
/// A path the response did not populate yields an explicitly unset output,
/// not an error. Values are exposed under the canonical dotted name only;
/// aliases are input conveniences and never appear on output. A path
/// landing on an interior node exposes that subtree as a single map value.
pub fn flatten_paths(tree: &Node, paths: &[FieldPath]) -> FlatParams {
    let mut out = FlatParams::new();
    let mut found = 0usize;

    for path in paths {
        match tree.get(path) {
            Some(node) => {
                out.set(path.dotted(), node.to_value());
                found += 1;
            }
            None => out.unset(path.dotted()),
        }
    }

    debug!(requested = paths.len(), found, "response flattened");
    out
}
