//! Conversion between YAML documents and node graphs.
//!
//! YAML mappings become [`Node::Map`], sequences become [`Node::List`] and
//! `null` becomes the null reference. A mapping carrying a local tag such as
//! `!Point {x: 1, y: 2}` becomes a [`Record`] named after the tag, which gives
//! documents a way to express fixed-shape values.
//!
//! # Example
//!
//! ```
//! use slotpath::graph::convert::parse_node;
//! use slotpath::graph::node::{Kind, Node};
//!
//! let node = parse_node("b: !B {S: '5', I: 5}\nmissing: ~").unwrap();
//! assert_eq!(node.child("b").unwrap().kind(), Kind::Record);
//! assert!(node.child("missing").unwrap().is_null());
//! ```

use super::node::{Node, Record};
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};

/// Parses a single YAML (or JSON) fragment into a node.
pub fn parse_node(text: &str) -> Result<Node> {
    let value: Value = serde_yaml::from_str(text).context("Failed to parse YAML")?;
    from_yaml(&value)
}

/// Converts a `serde_yaml::Value` into a node graph.
///
/// # Errors
///
/// Returns an error if a mapping key is itself a mapping or sequence, or if
/// a tag is attached to anything other than a mapping.
pub fn from_yaml(value: &Value) -> Result<Node> {
    let node = match value {
        Value::Null => Node::null(),
        Value::Bool(b) => Node::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Node::Integer(i),
            None => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Node::String(s.clone()),
        Value::Sequence(items) => Node::List(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    from_yaml(item).with_context(|| format!("In sequence element {}", index))
                })
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => Node::Map(convert_mapping(mapping)?),
        Value::Tagged(tagged) => {
            let name = tag_name(&tagged.tag);
            let Value::Mapping(mapping) = &tagged.value else {
                bail!("Tag !{} is only supported on mappings", name);
            };
            let record = convert_mapping(mapping)?
                .into_iter()
                .fold(Record::new(name), |record, (field, value)| {
                    record.with_field(field, value)
                });
            Node::Record(record)
        }
    };
    Ok(node)
}

fn convert_mapping(mapping: &Mapping) -> Result<IndexMap<String, Node>> {
    let mut entries = IndexMap::with_capacity(mapping.len());
    for (key, value) in mapping.iter() {
        let key = key_string(key)?;
        let node = from_yaml(value).with_context(|| format!("In value of key '{}'", key))?;
        entries.insert(key, node);
    }
    Ok(entries)
}

fn key_string(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        _ => bail!("Mapping keys must be scalars"),
    }
}

fn tag_name(tag: &Tag) -> String {
    tag.to_string().trim_start_matches('!').to_string()
}

/// Converts a node graph back into a `serde_yaml::Value`.
///
/// References are written as their referent (or `null`). Records become
/// tagged mappings when `keep_tags` is set, and plain mappings otherwise,
/// which is what JSON output needs. A graph containing a reference cycle
/// cannot be converted.
pub fn to_yaml(node: &Node, keep_tags: bool) -> Value {
    match node {
        Node::Ref(None) => Value::Null,
        Node::Ref(Some(shared)) => to_yaml(&shared.borrow(), keep_tags),
        Node::Boolean(b) => Value::Bool(*b),
        Node::Integer(i) => Value::Number((*i).into()),
        Node::Float(f) => Value::Number((*f).into()),
        Node::String(s) => Value::String(s.clone()),
        Node::List(items) => {
            Value::Sequence(items.iter().map(|item| to_yaml(item, keep_tags)).collect())
        }
        Node::Map(entries) => Value::Mapping(
            entries
                .iter()
                .map(|(key, value)| (Value::String(key.clone()), to_yaml(value, keep_tags)))
                .collect(),
        ),
        Node::Record(record) => {
            let mapping: Mapping = record
                .fields()
                .map(|(name, value)| (Value::String(name.to_string()), to_yaml(value, keep_tags)))
                .collect();
            if keep_tags && !record.name().is_empty() {
                Value::Tagged(Box::new(TaggedValue {
                    tag: Tag::new(record.name()),
                    value: Value::Mapping(mapping),
                }))
            } else {
                Value::Mapping(mapping)
            }
        }
    }
}
