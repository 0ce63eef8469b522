//! Shared helpers for integration tests

use weft::schema::path::FieldPath;
use weft::schema::{FieldSchema, SchemaSet, ValueKind};

pub fn path(s: &str) -> FieldPath {
    FieldPath::parse(s).unwrap()
}

/// The cluster-creation schema used across the integration tests: a mix of
/// scalar, list, map, and record fields with aliases and required flags.
pub fn cluster_schema() -> SchemaSet {
    SchemaSet::new(vec![
        FieldSchema::new(path("Name"), ValueKind::Scalar).required(),
        FieldSchema::new(path("Description"), ValueKind::Scalar),
        FieldSchema::new(path("Vpc.Subnets"), ValueKind::List)
            .with_alias("SubnetIds")
            .required(),
        FieldSchema::new(path("Vpc.SecurityGroupIds"), ValueKind::List)
            .with_alias("SecurityGroups"),
        FieldSchema::new(path("Scaling.Min"), ValueKind::Scalar),
        FieldSchema::new(path("Scaling.Max"), ValueKind::Scalar),
        FieldSchema::new(path("Tags"), ValueKind::ScalarMap),
        FieldSchema::new(path("Routing.Rules"), ValueKind::NestedMap),
        FieldSchema::new(path("Advanced"), ValueKind::Record),
    ])
    .unwrap()
}
