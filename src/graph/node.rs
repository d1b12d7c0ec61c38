//! Node representation for in-memory value graphs.
//!
//! A graph is built from [`Node`] values. Containers come in three shapes:
//! string-keyed maps, fixed-shape records, and ordered lists. A [`Node::Ref`]
//! is a nullable, shared reference to another node; cloning it aliases the
//! referent the way a pointer would.
//!
//! # Example
//!
//! ```
//! use slotpath::graph::node::{Node, Record};
//! use indexmap::IndexMap;
//!
//! let b = Node::share(Node::Record(
//!     Record::new("B")
//!         .with_field("S", Node::from("3"))
//!         .with_field("I", Node::Integer(3)),
//! ));
//!
//! let mut map = IndexMap::new();
//! map.insert("3".to_string(), b.clone());
//! let root = Node::Map(map);
//!
//! // The map entry and `b` point at the same record.
//! assert!(root.child("3").unwrap().same_target(&b));
//! ```

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Storage behind a non-null [`Node::Ref`].
pub type Shared = Rc<RefCell<Node>>;

/// The variant of a node, used in diagnostics and slot type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Map,
    Record,
    List,
    Ref,
    String,
    Integer,
    Float,
    Boolean,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::List => "list",
            Kind::Ref => "ref",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-shape value with a type name and named fields.
///
/// Fields are declared while building the record and cannot be added
/// afterwards; only their values can be replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    fields: IndexMap<String, Node>,
}

impl Record {
    /// Creates a record type instance with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Declares a field with its initial value.
    ///
    /// Declaring the same field twice keeps the original position and the
    /// latest value.
    pub fn with_field(mut self, name: impl Into<String>, value: Node) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&Node> {
        self.fields.get(field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut Node> {
        self.fields.get_mut(field)
    }

    /// Iterates over fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A value in the graph.
///
/// `PartialEq` compares by value and follows references, so two distinct
/// references to equal records compare equal. Use [`Node::same_target`] for
/// identity. Comparing or formatting a graph that contains a reference cycle
/// does not terminate.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// String-keyed mapping; missing keys are absent, not errors
    Map(IndexMap<String, Node>),
    /// Fixed-shape record with named fields
    Record(Record),
    /// Ordered sequence addressed by index
    List(Vec<Node>),
    /// Nullable shared reference
    Ref(Option<Shared>),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Node {
    /// Returns the null reference.
    pub fn null() -> Self {
        Node::Ref(None)
    }

    /// Moves `node` behind a new shared reference.
    pub fn share(node: Node) -> Self {
        Node::Ref(Some(Rc::new(RefCell::new(node))))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Node::Map(_) => Kind::Map,
            Node::Record(_) => Kind::Record,
            Node::List(_) => Kind::List,
            Node::Ref(_) => Kind::Ref,
            Node::String(_) => Kind::String,
            Node::Integer(_) => Kind::Integer,
            Node::Float(_) => Kind::Float,
            Node::Boolean(_) => Kind::Boolean,
        }
    }

    /// Returns true for the null reference.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Ref(None))
    }

    /// Returns the referent of a non-null reference.
    pub fn target(&self) -> Option<&Shared> {
        match self {
            Node::Ref(Some(shared)) => Some(shared),
            _ => None,
        }
    }

    /// Returns true when both nodes are non-null references to the same
    /// storage.
    ///
    /// ```
    /// use slotpath::graph::node::Node;
    ///
    /// let a = Node::share(Node::Integer(1));
    /// let b = Node::share(Node::Integer(1));
    /// assert!(a.same_target(&a.clone()));
    /// assert!(!a.same_target(&b));
    /// assert_eq!(a, b);
    /// ```
    pub fn same_target(&self, other: &Node) -> bool {
        match (self.target(), other.target()) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns a copy of the direct child named by `key`, looking through
    /// references.
    ///
    /// Lists take a decimal index. Copies of references alias the same
    /// storage as the original.
    pub fn child(&self, key: &str) -> Option<Node> {
        match self {
            Node::Ref(Some(shared)) => shared.borrow().child(key),
            Node::Map(entries) => entries.get(key).cloned(),
            Node::Record(record) => record.get(key).cloned(),
            Node::List(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .cloned(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Integer(i) => Some(*i as f64),
            Node::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Integer(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Boolean(value)
    }
}

impl From<Record> for Node {
    fn from(value: Record) -> Self {
        Node::Record(value)
    }
}
