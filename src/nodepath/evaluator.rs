//! Walks a path through a node graph and performs the terminal assignment.

use super::error::{ErrorKind, PathError};
use super::path::Path;
use super::slot::Slot;
use crate::graph::node::Node;
use tracing::{debug, trace};

impl Path {
    /// Overwrites the node addressed by this path with `value`.
    ///
    /// Every segment but the last is read, never written. The last segment
    /// is stored according to the container it lives in: a map gets the key
    /// inserted or overwritten, a record or list gets the existing field or
    /// element replaced. A record field that does not exist cannot be
    /// created this way, while a missing map key can.
    ///
    /// `root` must be the caller's own graph. Setting on a clone only
    /// changes the clone, except for storage reached through a
    /// [`Node::Ref`], which clones share.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] carrying the path prefix that was resolved
    /// before the failing segment. On error the graph is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use slotpath::graph::node::Node;
    /// use slotpath::nodepath::{ErrorKind, Path};
    /// use indexmap::IndexMap;
    ///
    /// let mut root = Node::Map(IndexMap::new());
    /// Path::parse("answer").set(&mut root, Node::Integer(42)).unwrap();
    /// assert_eq!(root.child("answer"), Some(Node::Integer(42)));
    ///
    /// let err = Path::parse("answer/deeper").set(&mut root, Node::Integer(1)).unwrap_err();
    /// assert_eq!(err.prefix(), "answer");
    /// assert!(matches!(err.kind(), ErrorKind::NotTraversable(_)));
    /// ```
    pub fn set(&self, root: &mut Node, value: Node) -> Result<(), PathError> {
        self.replace(root, value).map(|_| ())
    }

    /// Like [`Path::set`], but returns the value previously stored at the
    /// target, or `None` if a new map key was created.
    pub fn replace(&self, root: &mut Node, value: Node) -> Result<Option<Node>, PathError> {
        if self.is_empty() {
            return Err(PathError::new(ErrorKind::EmptyPath, ""));
        }
        descend(self, root, 0, value)
    }
}

/// Resolves `path.segments()[depth]` against `node`, recursing until the
/// terminal segment. Borrows of shared referents stay alive on the stack
/// until the assignment is done.
fn descend(
    path: &Path,
    node: &mut Node,
    depth: usize,
    value: Node,
) -> Result<Option<Node>, PathError> {
    let fail = |kind: ErrorKind| PathError::new(kind, path.through(depth));

    match node {
        Node::Ref(None) => Err(fail(ErrorKind::EmptyParent)),
        Node::Ref(Some(shared)) => {
            let mut target = shared
                .try_borrow_mut()
                .map_err(|_| fail(ErrorKind::BorrowConflict))?;
            descend(path, &mut target, depth, value)
        }
        container => {
            let segment = &path.segments()[depth];
            trace!(depth, segment = %segment, kind = %container.kind(), "resolving segment");

            let slot = Slot::resolve(container, segment).map_err(fail)?;
            if depth + 1 == path.len() {
                let previous = slot.assign(value).map_err(fail)?;
                debug!(path = %path, created = previous.is_none(), "assigned value");
                return Ok(previous);
            }

            match slot.into_node() {
                Some(child) => descend(path, child, depth + 1, value),
                None => Err(PathError::new(
                    ErrorKind::EmptyParent,
                    path.through(depth + 1),
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::{Kind, Record};
    use indexmap::IndexMap;

    #[test]
    fn test_empty_path_is_rejected() {
        let mut root = Node::Map(IndexMap::new());
        let err = Path::new(vec![]).set(&mut root, Node::Integer(1)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptyPath);
    }

    #[test]
    fn test_empty_string_path_addresses_empty_key() {
        let mut root = Node::Map(IndexMap::new());
        Path::parse("").set(&mut root, Node::Integer(1)).unwrap();
        assert_eq!(root.child(""), Some(Node::Integer(1)));
    }

    #[test]
    fn test_reference_chains_are_followed() {
        let inner = Node::share(Node::Record(Record::new("B").with_field("I", Node::Integer(1))));
        let mut root = Node::share(inner.clone());

        Path::parse("I").set(&mut root, Node::Integer(2)).unwrap();
        assert_eq!(inner.child("I"), Some(Node::Integer(2)));
    }

    #[test]
    fn test_reference_cycle_reports_borrow_conflict() {
        let cell = Node::share(Node::Map(IndexMap::new()));
        if let Some(shared) = cell.target() {
            if let Node::Map(map) = &mut *shared.borrow_mut() {
                map.insert("self".to_string(), cell.clone());
            }
        }

        let mut root = cell.clone();
        let err = Path::parse("self/x").set(&mut root, Node::Integer(1)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::BorrowConflict);
        assert_eq!(err.prefix(), "self");

        // Break the cycle so the Rc can be dropped.
        if let Some(shared) = cell.target() {
            *shared.borrow_mut() = Node::null();
        }
    }

    #[test]
    fn test_type_mismatch_leaves_graph_unchanged() {
        let mut root = Node::Record(Record::new("B").with_field("I", Node::Integer(5)));
        let before = root.clone();

        let err = Path::parse("I").set(&mut root, Node::Boolean(true)).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::TypeMismatch {
                expected: Kind::Integer,
                found: Kind::Boolean
            }
        );
        assert_eq!(err.prefix(), "");
        assert_eq!(root, before);
    }

    #[test]
    fn test_replace_returns_previous_value() {
        let mut root = Node::List(vec![Node::from("a"), Node::from("b")]);
        let previous = Path::parse("0").replace(&mut root, Node::from("z")).unwrap();
        assert_eq!(previous, Some(Node::from("a")));
    }
}
