//! Integration tests for batches of PATH=VALUE assignments.

use slotpath::edit::{apply_all, Assignment};
use slotpath::graph::convert::parse_node;
use slotpath::graph::node::{Kind, Node};
use slotpath::nodepath::{ErrorKind, PathError};

fn parse_all(texts: &[&str]) -> Vec<Assignment> {
    texts
        .iter()
        .map(|text| Assignment::parse(text, true).unwrap())
        .collect()
}

#[test]
fn test_apply_in_order() {
    let mut root = parse_node("b: !B {S: '5', I: 5}\nmapB: {}").unwrap();
    let edits = parse_all(&[
        "b/S='10'",
        "b/I=10",
        "mapB/3=!B {S: '3', I: 3}",
        "mapB/3/I=30",
    ]);

    assert_eq!(apply_all(&mut root, &edits).unwrap(), 4);

    let b = root.child("b").unwrap();
    assert_eq!(b.child("S"), Some(Node::from("10")));
    assert_eq!(b.child("I"), Some(Node::Integer(10)));

    let entry = root.child("mapB").unwrap().child("3").unwrap();
    assert_eq!(entry.kind(), Kind::Record);
    assert_eq!(entry.child("I"), Some(Node::Integer(30)));
}

#[test]
fn test_failure_names_assignment_and_keeps_path_error() {
    let mut root = parse_node("sliceB: [a, b]").unwrap();
    let edits = parse_all(&["sliceB/0=x", "sliceB/99=y"]);

    let err = apply_all(&mut root, &edits).unwrap_err();
    assert!(err.to_string().contains("Assignment 2 (sliceB/99)"));

    let path_error = err.downcast_ref::<PathError>().unwrap();
    assert_eq!(
        path_error.kind(),
        &ErrorKind::IndexOutOfRange { index: 99, len: 2 }
    );

    // Earlier assignments stay applied.
    assert_eq!(root.child("sliceB").unwrap().child("0"), Some(Node::from("x")));
}

#[test]
fn test_raw_string_values() {
    let mut root = parse_node("port: '80'").unwrap();
    let edits = vec![Assignment::parse("port=8080", false).unwrap()];

    apply_all(&mut root, &edits).unwrap();
    assert_eq!(root.child("port"), Some(Node::from("8080")));
}

#[test]
fn test_record_shape_is_enforced() {
    let mut root = parse_node("b: !B {S: '5'}").unwrap();
    let edits = parse_all(&["b/T=1"]);

    let err = apply_all(&mut root, &edits).unwrap_err();
    let path_error = err.downcast_ref::<PathError>().unwrap();
    assert_eq!(path_error.kind(), &ErrorKind::NotAssignable("T".to_string()));
    assert_eq!(path_error.prefix(), "b");
}

#[test]
fn test_invalid_value_is_reported() {
    let err = Assignment::parse("a=[unclosed", true).unwrap_err();
    assert!(err.to_string().contains("Invalid value for path 'a'"));
}

#[test]
fn test_empty_batch() {
    let mut root = parse_node("a: 1").unwrap();
    assert_eq!(apply_all(&mut root, &[]).unwrap(), 0);
}

#[test]
fn test_list_element_can_change_kind() {
    let mut root = parse_node("tags: [a, b]").unwrap();
    apply_all(&mut root, &parse_all(&["tags/0=5"])).unwrap();
    assert_eq!(root.child("tags").unwrap().child("0"), Some(Node::Integer(5)));
}

#[test]
fn test_null_list_element_takes_any_value() {
    let mut root = parse_node("items: [~, 1]").unwrap();
    apply_all(&mut root, &parse_all(&["items/0=x"])).unwrap();
    assert_eq!(root.child("items").unwrap().child("0"), Some(Node::from("x")));
}

#[test]
fn test_integer_into_float_field() {
    let mut root = parse_node("p: !P {x: 1.5}").unwrap();
    apply_all(&mut root, &parse_all(&["p/x=2"])).unwrap();
    assert_eq!(root.child("p").unwrap().child("x"), Some(Node::Float(2.0)));
}

#[test]
fn test_null_record_field_takes_any_value() {
    let mut root = parse_node("b: !B {S: ~}").unwrap();
    apply_all(&mut root, &parse_all(&["b/S=x"])).unwrap();
    assert_eq!(root.child("b").unwrap().child("S"), Some(Node::from("x")));
}

#[test]
fn test_map_value_can_change_kind() {
    let mut root = parse_node("m: {a: x}").unwrap();
    apply_all(&mut root, &parse_all(&["m/a=5"])).unwrap();
    assert_eq!(root.child("m").unwrap().child("a"), Some(Node::Integer(5)));
}

#[test]
fn test_declared_record_field_keeps_kind() {
    let mut root = parse_node("b: !B {I: 5}").unwrap();
    let err = apply_all(&mut root, &parse_all(&["b/I=five"])).unwrap_err();
    let path_error = err.downcast_ref::<PathError>().unwrap();
    assert_eq!(
        path_error.kind(),
        &ErrorKind::TypeMismatch {
            expected: Kind::Integer,
            found: Kind::String
        }
    );
}
