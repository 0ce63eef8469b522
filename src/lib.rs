//! Weft: Hierarchical Optional-Parameter Mapping
//!
//! Weaves a flat namespace of independently-optional, alias-bearing
//! parameters into a nested request tree, collapsing interior nodes whose
//! entire subtree is unset, and flattens nested response trees back into
//! named values.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod schema;
pub mod tree;
pub mod validate;
pub mod value;
