//! Engine facade
//!
//! Ties the per-invocation flow together: required-field validation, tree
//! construction, payload rendering, and response projection. The transport
//! in between is an external collaborator; the facade only produces and
//! consumes its opaque payloads.

use crate::error::MapError;
use crate::params::FlatParams;
use crate::schema::SchemaSet;
use crate::tree::builder::TreeBuilder;
use crate::tree::flatten::{project, Projected, Projection};
use crate::tree::node::Node;
use crate::validate::{enforce_required, RequiredPolicy, RequiredWarning};

/// One schema set plus the embedding caller's policy choices.
///
/// Immutable after construction; invocations share it read-only and may run
/// concurrently.
#[derive(Debug)]
pub struct MappingEngine {
    schema: SchemaSet,
    required: RequiredPolicy,
}

impl MappingEngine {
    pub fn new(schema: SchemaSet) -> Self {
        Self {
            schema,
            required: RequiredPolicy::default(),
        }
    }

    pub fn with_required_policy(mut self, policy: RequiredPolicy) -> Self {
        self.required = policy;
        self
    }

    pub fn schema(&self) -> &SchemaSet {
        &self.schema
    }

    /// Validate and build the request tree for one invocation.
    ///
    /// Returns the tree (absent when nothing was set) together with any
    /// advisory required-field warnings. Validation runs before tree
    /// construction; under a fatal policy a missing required field aborts
    /// here.
    pub fn build_request(
        &self,
        params: &FlatParams,
    ) -> Result<(Option<Node>, Vec<RequiredWarning>), MapError> {
        let warnings = enforce_required(&self.schema, params, self.required)?;
        let tree = TreeBuilder::new(&self.schema).build(params)?;
        Ok((tree, warnings))
    }

    /// Build the request and render it as the opaque JSON payload for the
    /// transport collaborator. An absent tree renders as JSON null.
    pub fn request_payload(&self, params: &FlatParams) -> Result<serde_json::Value, MapError> {
        let (tree, _warnings) = self.build_request(params)?;
        Ok(tree
            .map(|node| node.to_json())
            .unwrap_or(serde_json::Value::Null))
    }

    /// Parse a transport reply and project it for the caller.
    pub fn project_response(
        &self,
        payload: &serde_json::Value,
        projection: &Projection,
    ) -> Result<Projected, MapError> {
        let tree = Node::from_json(payload)?;
        Ok(project(&tree, projection))
    }
}
