//! Common test utilities for codegraph-fragment integration tests

#![allow(dead_code)]

use codegraph_fragment::{FragmentError, SyntaxNode};

/// Install a test-writer subscriber once; `RUST_LOG=debug` shows parser events
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert that `err` is a cardinality violation with the given count
pub fn assert_cardinality(err: &FragmentError, expected_found: usize) {
    match err {
        FragmentError::CardinalityViolation { found, .. } => assert_eq!(
            *found, expected_found,
            "Expected {expected_found} matches to be reported, got {found}"
        ),
        other => panic!("Expected CardinalityViolation, got: {other:?}"),
    }
}

/// Assert that a node parsed cleanly
pub fn assert_clean(node: &SyntaxNode) {
    assert!(
        !node.has_error(),
        "Expected no ERROR/MISSING nodes in {:?}",
        node.text()
    );
}
