// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde::Deserialize;

fn sample() -> Node {
    let mut inner = Mapping::new();
    inner.insert("depth", Node::Scalar(Scalar::Int(2)));
    inner.insert(LINE_KEY, Node::Scalar(Scalar::Int(4)));

    let mut mapping = Mapping::new();
    mapping.insert("description", Node::string("login"));
    mapping.insert("config", Node::Mapping(inner));
    mapping.insert(LINE_KEY, Node::Scalar(Scalar::Int(3)));
    Node::Mapping(mapping)
}

#[test]
fn insert_replaces_in_place() {
    let mut mapping = Mapping::new();
    mapping.insert("a", Node::string("1"));
    mapping.insert("b", Node::string("2"));
    let old = mapping.insert("a", Node::string("3"));

    assert_eq!(old, Some(Node::string("1")));
    assert_eq!(
        mapping.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert_eq!(mapping.get("a"), Some(&Node::string("3")));
}

#[test]
fn line_reads_the_annotation() {
    let node = sample();
    assert_eq!(node.line(), Some(3));
    assert_eq!(node.get("config").and_then(Node::line), Some(4));
    assert_eq!(Node::string("x").line(), None);
}

#[test]
fn fields_skip_the_annotation() {
    let node = sample();
    let keys: Vec<_> = node.as_mapping().unwrap().fields().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["description", "config"]);
}

#[test]
fn display_renders_flow_style() {
    let node = Node::Sequence(vec![sample(), Node::null()]);
    assert_eq!(
        node.to_string(),
        r#"[{description: "login", config: {depth: 2, __line__: 4}, __line__: 3}, null]"#
    );
}

#[test]
fn to_json_keeps_line_entries() {
    let json = sample().to_json();
    assert_eq!(json["description"], "login");
    assert_eq!(json["__line__"], 3);
    assert_eq!(json["config"]["depth"], 2);
}

#[test]
fn deserializes_into_typed_values() {
    #[derive(Debug, Deserialize)]
    struct Header {
        description: String,
        #[serde(rename = "__line__")]
        line: usize,
    }

    let header: Header = sample().deserialize().unwrap();
    assert_eq!(header.description, "login");
    assert_eq!(header.line, 3);
}

#[test]
fn type_names() {
    assert_eq!(Node::null().type_name(), "null");
    assert_eq!(Node::Sequence(vec![]).type_name(), "sequence");
    assert_eq!(sample().type_name(), "mapping");
    assert_eq!(Node::Scalar(Scalar::Float(1.5)).type_name(), "float");
}
