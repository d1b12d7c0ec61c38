//! Slash-delimited paths that address and overwrite nodes in a graph.
//!
//! A path such as `MapB/3/S` is split on `/` into segments. Setting walks
//! the graph one segment at a time:
//!
//! - references are dereferenced first; a null reference fails
//! - maps look the segment up as a key
//! - records look the segment up as a field name
//! - lists parse the segment as a decimal index
//! - scalars cannot be descended into
//!
//! The final segment is assigned by the container that holds it, so a map
//! parent inserts or overwrites the key while a record or list parent
//! replaces the existing field or element.
//!
//! There is no escaping, no wildcards and no slicing.

pub mod error;
pub mod evaluator;
pub mod path;
pub mod slot;

pub use error::{ErrorKind, PathError};
pub use path::Path;
pub use slot::Slot;
