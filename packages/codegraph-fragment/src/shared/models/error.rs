//! Error types for codegraph-fragment
//!
//! Shape mismatches are not errors: a fragment that parses as the wrong kind
//! of node comes back as `Ok(None)`. Only cardinality violations and failures
//! of the underlying machinery are reported here. Malformed documentation XML
//! is never an error; it degrades to text.

use thiserror::Error;

/// Main error type for fragment parsing
#[derive(Debug, Error)]
pub enum FragmentError {
    /// A collection that must hold exactly one element held some other count
    #[error("Expected exactly {expected} {element}, found {found}")]
    CardinalityViolation {
        element: &'static str,
        expected: usize,
        found: usize,
    },

    /// The fragment produced no node at the requested position
    #[error("Fragment contains no {category}")]
    EmptyFragment { category: &'static str },

    /// Fragment exceeds the configured size guard
    #[error("Fragment is {len} bytes, limit is {limit}")]
    FragmentTooLarge { len: usize, limit: usize },

    /// tree-sitter rejected the grammar (ABI mismatch)
    #[error("Failed to set language: {0}")]
    Language(String),

    /// tree-sitter returned no tree
    #[error("Parser returned no syntax tree")]
    ParseAborted,
}

impl FragmentError {
    /// Exactly-one rule broken for `element`
    pub fn cardinality(element: &'static str, found: usize) -> Self {
        FragmentError::CardinalityViolation {
            element,
            expected: 1,
            found,
        }
    }

    pub fn empty(category: &'static str) -> Self {
        FragmentError::EmptyFragment { category }
    }

    pub fn language(msg: impl Into<String>) -> Self {
        FragmentError::Language(msg.into())
    }

    pub fn is_cardinality_violation(&self) -> bool {
        matches!(self, FragmentError::CardinalityViolation { .. })
    }
}

/// Result type alias for fragment operations
pub type Result<T> = std::result::Result<T, FragmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_message() {
        let err = FragmentError::cardinality("parameter", 2);
        assert!(err.is_cardinality_violation());
        assert_eq!(err.to_string(), "Expected exactly 1 parameter, found 2");
    }

    #[test]
    fn test_empty_is_not_cardinality() {
        assert!(!FragmentError::empty("statement").is_cardinality_violation());
    }
}
