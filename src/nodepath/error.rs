//! Error types for path traversal and assignment.

use crate::graph::node::Kind;
use std::fmt;

/// What went wrong while walking or assigning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The path has no segments.
    EmptyPath,
    /// A null reference or absent value had to be descended into.
    EmptyParent,
    /// A list segment is not a non-negative decimal integer.
    InvalidIndex(String),
    /// A list segment is past the end of the list.
    IndexOutOfRange { index: usize, len: usize },
    /// The node has no children to look up.
    NotTraversable(Kind),
    /// The terminal segment names a record field that does not exist.
    NotAssignable(String),
    /// The value's kind differs from the kind held by the field or element.
    TypeMismatch { expected: Kind, found: Kind },
    /// A referent on the path is already borrowed, usually because the
    /// path runs around a reference cycle.
    BorrowConflict,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EmptyPath => write!(f, "path must contain at least one segment"),
            ErrorKind::EmptyParent => write!(f, "empty parent value"),
            ErrorKind::InvalidIndex(segment) => {
                write!(f, "'{}' is not a valid index for a list", segment)
            }
            ErrorKind::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            ErrorKind::NotTraversable(kind) => {
                write!(f, "unable to extract value from value of kind {}", kind)
            }
            ErrorKind::NotAssignable(field) => {
                write!(f, "record has no field '{}' to assign", field)
            }
            ErrorKind::TypeMismatch { expected, found } => {
                write!(f, "cannot assign {} value to {} slot", found, expected)
            }
            ErrorKind::BorrowConflict => write!(f, "referenced value is already borrowed"),
        }
    }
}

/// A traversal or assignment failure, tagged with the path prefix that was
/// consumed before the failing segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    kind: ErrorKind,
    prefix: String,
}

impl PathError {
    pub fn new(kind: ErrorKind, prefix: impl Into<String>) -> Self {
        Self {
            kind,
            prefix: prefix.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Segments resolved successfully before the failure, joined with `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::EmptyPath => write!(f, "{}", self.kind),
            _ => write!(
                f,
                "error traversing beyond path '{}': {}",
                self.prefix, self.kind
            ),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_prefix() {
        let err = PathError::new(ErrorKind::IndexOutOfRange { index: 99, len: 2 }, "SliceB");
        assert_eq!(
            err.to_string(),
            "error traversing beyond path 'SliceB': index 99 out of range for list of length 2"
        );
    }

    #[test]
    fn test_empty_path_has_no_prefix() {
        let err = PathError::new(ErrorKind::EmptyPath, "");
        assert_eq!(err.to_string(), "path must contain at least one segment");
    }

    #[test]
    fn test_not_traversable_names_kind() {
        let err = PathError::new(ErrorKind::NotTraversable(Kind::Integer), "B/I");
        assert!(err.to_string().ends_with("value of kind integer"));
        assert_eq!(err.prefix(), "B/I");
    }
}
