//! File I/O for documents.
//!
//! This module loads YAML or JSON documents (optionally gzipped) into node
//! graphs, and saves graphs back with atomic writes and optional backups.

pub mod loader;
pub mod saver;
