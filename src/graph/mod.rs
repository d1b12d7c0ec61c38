//! In-memory value graphs and their YAML conversions.

pub mod convert;
pub mod node;

pub use node::{Kind, Node, Record, Shared};
