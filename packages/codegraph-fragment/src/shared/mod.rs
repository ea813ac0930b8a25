//! Shared module - Common types and utilities
//!
//! Types shared by every layer of the fragments feature.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
