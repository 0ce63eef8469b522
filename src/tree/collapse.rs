//! Null-collapse evaluation
//!
//! The bottom-up rule deciding whether a constructed sub-record is real or
//! empty. A leaf only materializes for an explicitly provided value, so a
//! leaf always survives; an interior node survives iff at least one of its
//! children does. A surviving interior node is called *kept*.

use crate::tree::node::Node;
use std::collections::BTreeMap;

/// Collapse a node post-order, returning `None` for a subtree with no set
/// descendant leaf.
///
/// Zero-equivalent scalars (`0`, `""`, `false`) and explicitly provided
/// empty lists are leaves and survive; "falsy but provided" is never
/// treated as absent. The output contains no empty interior node at any
/// depth.
pub fn collapse(node: Node) -> Option<Node> {
    match node {
        Node::Leaf(value) => Some(Node::Leaf(value)),
        Node::Interior(children) => {
            let kept: BTreeMap<String, Node> = children
                .into_iter()
                .filter_map(|(name, child)| collapse(child).map(|kept| (name, kept)))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(Node::Interior(kept))
            }
        }
    }
}
