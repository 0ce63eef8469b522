//! Request/Response Trees
//!
//! The nested Interior/Leaf structure mirroring a structured API payload,
//! the builder that weaves a flat parameter set into one, the null-collapse
//! rule that removes all-unset interior nodes, and the flattener that
//! projects a response tree back out to named values.

pub mod builder;
pub mod collapse;
pub mod flatten;
pub mod node;
