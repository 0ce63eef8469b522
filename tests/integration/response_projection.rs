//! Response-side flows: payload parsing, path flattening, passthrough, and
//! the build/flatten round trip.

use super::test_utils::{cluster_schema, path};
use weft::api::MappingEngine;
use weft::params::FlatParams;
use weft::tree::builder::TreeBuilder;
use weft::tree::flatten::{flatten, flatten_paths, Projected, Projection};
use weft::tree::node::Node;
use weft::value::Value;

#[test]
fn test_flatten_uses_canonical_names_only() {
    let reply = serde_json::json!({"Vpc": {"Subnets": ["subnet-a"]}});
    let tree = Node::from_json(&reply).unwrap();
    let out = flatten(&tree, &cluster_schema());

    assert_eq!(
        out.value_of("Vpc.Subnets"),
        Some(&Value::string_list(["subnet-a"]))
    );
    // The alias never appears on output.
    assert!(!out.is_set("SubnetIds"));
}

#[test]
fn test_unpopulated_branches_flatten_to_unset() {
    let reply = serde_json::json!({"Name": "analytics"});
    let tree = Node::from_json(&reply).unwrap();
    let out = flatten_paths(&tree, &[path("Name"), path("Scaling.Min")]);

    assert_eq!(out.value_of("Name"), Some(&Value::string("analytics")));
    assert!(!out.is_set("Scaling.Min"));
}

#[test]
fn test_whole_tree_mode_preserves_nesting() {
    let engine = MappingEngine::new(cluster_schema());
    let reply = serde_json::json!({
        "Vpc": {"Subnets": ["subnet-a"], "SecurityGroupIds": ["sg-1"]},
    });

    match engine.project_response(&reply, &Projection::WholeTree).unwrap() {
        Projected::Tree(tree) => assert_eq!(tree.to_json(), reply),
        Projected::Values(_) => panic!("expected passthrough"),
    }
}

#[test]
fn test_build_flatten_round_trip() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("Name", "analytics")
        .with("Vpc.Subnets", Value::string_list(["subnet-a", "subnet-b"]))
        .with("Scaling.Min", 0i64);

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    let out = flatten(&tree, &schema);

    let original: Vec<(&str, &Value)> = params.set_entries().collect();
    let recovered: Vec<(&str, &Value)> = out.set_entries().collect();
    assert_eq!(original, recovered);
}

#[test]
fn test_rebuilding_from_flattened_output_is_identity() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("Name", "analytics")
        .with("Vpc.Subnets", Value::string_list(["subnet-a"]));

    let builder = TreeBuilder::new(&schema);
    let tree = builder.build(&params).unwrap().unwrap();
    let flattened = flatten(&tree, &schema);
    let rebuilt = builder.build(&flattened).unwrap().unwrap();

    assert_eq!(tree, rebuilt);
}
