//! Declarative schema files: TOML on disk through to a working builder.

use std::fs;
use tempfile::TempDir;
use weft::config::{load_schema_file, parse_schema_toml};
use weft::params::FlatParams;
use weft::tree::builder::TreeBuilder;
use weft::value::Value;

const CREATE_CLUSTER: &str = r#"
operation = "CreateCluster"

[[field]]
path = "Name"
kind = "scalar"
required = true

[[field]]
path = "Vpc.Subnets"
kind = "list"
aliases = ["SubnetIds"]

[[field]]
path = "Tags"
kind = "scalar-map"
"#;

#[test]
fn test_loaded_schema_drives_the_builder() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("create_cluster.toml");
    fs::write(&schema_path, CREATE_CLUSTER).unwrap();

    let schema = load_schema_file(&schema_path).unwrap();
    let params = FlatParams::new()
        .with("Name", "analytics")
        .with("SubnetIds", Value::string_list(["subnet-a"]));

    let tree = TreeBuilder::new(&schema).build(&params).unwrap().unwrap();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "Name": "analytics",
            "Vpc": {"Subnets": ["subnet-a"]},
        })
    );
}

#[test]
fn test_file_and_code_schemas_agree() {
    let from_file = parse_schema_toml(CREATE_CLUSTER).unwrap();

    let name = from_file.resolve_name("Name").unwrap();
    assert!(name.required);

    let by_alias = from_file.resolve_name("SubnetIds").unwrap();
    assert_eq!(by_alias.path.dotted(), "Vpc.Subnets");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    assert!(matches!(
        load_schema_file(&missing),
        Err(weft::error::SchemaError::Io(_))
    ));
}
