//! End-to-end request construction: flat parameters in, collapsed tree out.

use super::test_utils::{cluster_schema, path};
use std::collections::BTreeMap;
use weft::error::MapError;
use weft::params::FlatParams;
use weft::tree::builder::TreeBuilder;
use weft::tree::node::Node;
use weft::value::Value;

#[test]
fn test_alias_input_builds_canonical_tree() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("Name", "analytics")
        .with("SubnetIds", Value::string_list(["subnet-a", "subnet-b"]));

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "Name": "analytics",
            "Vpc": {"Subnets": ["subnet-a", "subnet-b"]},
        })
    );
}

#[test]
fn test_unset_branches_are_fully_absent() {
    let schema = cluster_schema();
    let params = FlatParams::new().with("Name", "analytics");

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    // No Vpc, Scaling, Tags, Routing, or Advanced keys at all, not empty
    // records.
    assert_eq!(tree.to_json(), serde_json::json!({"Name": "analytics"}));
}

#[test]
fn test_nothing_set_yields_absent_root() {
    let schema = cluster_schema();
    let tree = TreeBuilder::new(&schema).build(&FlatParams::new()).unwrap();
    assert!(tree.is_none());
}

#[test]
fn test_shared_prefix_merges_into_one_record() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("SubnetIds", Value::string_list(["subnet-a"]))
        .with("SecurityGroups", Value::string_list(["sg-1", "sg-2"]));

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "Vpc": {
                "SecurityGroupIds": ["sg-1", "sg-2"],
                "Subnets": ["subnet-a"],
            }
        })
    );
}

#[test]
fn test_zero_equivalents_are_sent() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("Name", "")
        .with("Scaling.Min", 0i64)
        .with("Scaling.Max", 0i64);

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "Name": "",
            "Scaling": {"Min": 0, "Max": 0},
        })
    );
}

#[test]
fn test_record_field_expands_recursively() {
    let schema = cluster_schema();
    let mut retry = BTreeMap::new();
    retry.insert("Attempts".to_string(), Value::from(3i64));
    let mut advanced = BTreeMap::new();
    advanced.insert("Retry".to_string(), Value::Map(retry));
    advanced.insert("Zone".to_string(), Value::string("eu-1"));
    let params = FlatParams::new().with("Advanced", Value::Map(advanced));

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "Advanced": {"Retry": {"Attempts": 3}, "Zone": "eu-1"},
        })
    );
}

#[test]
fn test_conflicting_names_abort_construction() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("Vpc.Subnets", Value::string_list(["subnet-a"]))
        .with("SubnetIds", Value::string_list(["subnet-b"]));

    let err = TreeBuilder::new(&schema).build(&params).unwrap_err();
    assert!(matches!(err, MapError::ConflictingAlias { path, .. } if path.dotted() == "Vpc.Subnets"));
}

#[test]
fn test_type_mismatch_names_path_and_key() {
    let schema = cluster_schema();
    let mut rules = BTreeMap::new();
    rules.insert("default".to_string(), Value::string("not-a-map"));
    let params = FlatParams::new().with("Routing.Rules", Value::Map(rules));

    let err = TreeBuilder::new(&schema).build(&params).unwrap_err();
    match err {
        MapError::MapEntryMismatch { path, key, .. } => {
            assert_eq!(path.dotted(), "Routing.Rules");
            assert_eq!(key, "default");
        }
        other => panic!("expected MapEntryMismatch, got {other:?}"),
    }
}

/// No interior node of any built tree is empty.
fn assert_no_empty_interiors(node: &Node) {
    if let Node::Interior(children) = node {
        assert!(!children.is_empty(), "empty interior node in output");
        for child in children.values() {
            assert_no_empty_interiors(child);
        }
    }
}

#[test]
fn test_collapse_invariant_over_mixed_input() {
    let schema = cluster_schema();
    let params = FlatParams::new()
        .with("Name", "analytics")
        .with("Tags", Value::Map(BTreeMap::new()))
        .with("Scaling.Min", 1i64);

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    assert_no_empty_interiors(&tree);
    // The explicitly empty Tags map collapsed away entirely.
    assert!(tree.get(&path("Tags")).is_none());
}
