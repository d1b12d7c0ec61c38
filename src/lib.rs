//! Slotpath - address a node inside an in-memory value graph with a
//! slash-delimited path and overwrite it in place.
//!
//! ```
//! use slotpath::graph::node::{Node, Record};
//! use slotpath::nodepath::Path;
//!
//! let mut root = Node::Record(
//!     Record::new("B")
//!         .with_field("S", Node::from("5"))
//!         .with_field("I", Node::Integer(5)),
//! );
//!
//! Path::parse("S").set(&mut root, Node::from("10")).unwrap();
//! assert_eq!(root.child("S"), Some(Node::from("10")));
//! ```

pub mod config;
pub mod edit;
pub mod file;
pub mod graph;
pub mod nodepath;
