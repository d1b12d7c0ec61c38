//! Batches of `PATH=VALUE` assignments.
//!
//! # Example
//!
//! ```
//! use slotpath::edit::{apply_all, Assignment};
//! use slotpath::graph::convert::parse_node;
//! use slotpath::graph::node::Node;
//!
//! let mut root = parse_node("server: {port: 80}").unwrap();
//! let edits = vec![
//!     Assignment::parse("server/port=8080", true).unwrap(),
//!     Assignment::parse("server/host=example.org", true).unwrap(),
//! ];
//!
//! assert_eq!(apply_all(&mut root, &edits).unwrap(), 2);
//! assert_eq!(root.child("server").unwrap().child("port"), Some(Node::Integer(8080)));
//! ```

use crate::graph::convert::parse_node;
use crate::graph::node::Node;
use crate::nodepath::Path;
use anyhow::{Context, Result};

/// A single path assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: Path,
    pub value: Node,
}

impl Assignment {
    /// Parses `PATH=VALUE`, splitting on the first `=`.
    ///
    /// With `parse_values` the value is read as a YAML fragment, so `10` is
    /// an integer, `'10'` a string, `~` the null reference and
    /// `!B {S: x, I: 1}` a record. Otherwise the value is taken verbatim as
    /// a string.
    pub fn parse(text: &str, parse_values: bool) -> Result<Self> {
        let (path, raw) = text
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected PATH=VALUE, got '{}'", text))?;

        let value = if parse_values {
            parse_node(raw).with_context(|| format!("Invalid value for path '{}'", path))?
        } else {
            Node::String(raw.to_string())
        };

        Ok(Self {
            path: Path::parse(path),
            value,
        })
    }
}

/// Applies assignments in order and returns how many were applied.
///
/// Stops at the first failure. Assignments before it stay applied, so
/// callers that want all-or-nothing should discard the graph on error.
pub fn apply_all(root: &mut Node, assignments: &[Assignment]) -> Result<usize> {
    for (index, assignment) in assignments.iter().enumerate() {
        let previous = assignment
            .path
            .replace(root, assignment.value.clone())
            .with_context(|| format!("Assignment {} ({}) failed", index + 1, assignment.path))?;
        tracing::info!(
            path = %assignment.path,
            replaced = ?previous.as_ref().map(Node::kind),
            "applied assignment"
        );
    }
    Ok(assignments.len())
}
