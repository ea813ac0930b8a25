//! Utility modules shared across features
//!
//! - `cardinality`: exactly-one unwrapping
//! - `tree_sitter`: tree-sitter node traversal and span conversion

pub mod cardinality;
pub mod tree_sitter;

pub use cardinality::exactly_one;
