//! Addressable storage locations inside a container node.

use super::error::ErrorKind;
use crate::graph::node::{Node, Record};
use indexmap::IndexMap;
use std::mem;

/// A mutable location identified by a container plus a key, field or index.
///
/// Resolving a slot never fails for a missing map key or record field; the
/// slot simply has no current value. Whether it can be written depends on
/// the container: map entries are always writable, record fields only when
/// declared, list elements always (the index is checked on resolution).
#[derive(Debug)]
pub enum Slot<'a> {
    Entry {
        map: &'a mut IndexMap<String, Node>,
        key: String,
    },
    Field {
        record: &'a mut Record,
        name: String,
    },
    Element {
        list: &'a mut Vec<Node>,
        index: usize,
    },
}

impl<'a> Slot<'a> {
    /// Resolves `segment` against an already dereferenced container.
    ///
    /// References and scalars have no slots of their own and yield
    /// [`ErrorKind::NotTraversable`].
    pub fn resolve(container: &'a mut Node, segment: &str) -> Result<Self, ErrorKind> {
        match container {
            Node::Map(map) => Ok(Slot::Entry {
                map,
                key: segment.to_string(),
            }),
            Node::Record(record) => Ok(Slot::Field {
                record,
                name: segment.to_string(),
            }),
            Node::List(list) => {
                let index = segment
                    .parse::<usize>()
                    .map_err(|_| ErrorKind::InvalidIndex(segment.to_string()))?;
                if index >= list.len() {
                    return Err(ErrorKind::IndexOutOfRange {
                        index,
                        len: list.len(),
                    });
                }
                Ok(Slot::Element { list, index })
            }
            other => Err(ErrorKind::NotTraversable(other.kind())),
        }
    }

    /// Turns the slot into its current value, or `None` if nothing is
    /// stored there.
    pub fn into_node(self) -> Option<&'a mut Node> {
        match self {
            Slot::Entry { map, key } => map.get_mut(&key),
            Slot::Field { record, name } => record.get_mut(&name),
            Slot::Element { list, index } => list.get_mut(index),
        }
    }

    /// Stores `value`, returning whatever the slot held before.
    ///
    /// Map entries and list elements are untyped and take any value. A
    /// record field keeps the kind it was declared with, unless it holds the
    /// null reference, which takes anything. Integers widen into float
    /// fields.
    pub fn assign(self, value: Node) -> Result<Option<Node>, ErrorKind> {
        match self {
            Slot::Entry { map, key } => Ok(map.insert(key, value)),
            Slot::Field { record, name } => match record.get_mut(&name) {
                Some(current) => replace_field(current, value).map(Some),
                None => Err(ErrorKind::NotAssignable(name)),
            },
            Slot::Element { list, index } => {
                let len = list.len();
                match list.get_mut(index) {
                    Some(current) => Ok(Some(mem::replace(current, value))),
                    None => Err(ErrorKind::IndexOutOfRange { index, len }),
                }
            }
        }
    }
}

fn replace_field(current: &mut Node, value: Node) -> Result<Node, ErrorKind> {
    let value = match (&*current, value) {
        (Node::Float(_), Node::Integer(i)) => Node::Float(i as f64),
        (Node::Ref(None), value) => value,
        (current, value) if current.kind() != value.kind() => {
            return Err(ErrorKind::TypeMismatch {
                expected: current.kind(),
                found: value.kind(),
            });
        }
        (_, value) => value,
    };
    Ok(mem::replace(current, value))
}
