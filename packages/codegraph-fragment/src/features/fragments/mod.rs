//! Fragments Feature
//!
//! Parses standalone C# source fragments into typed syntax nodes.
//!
//! ## Structure
//! - `domain/` - SyntaxNode snapshot, typed node wrappers, documentation XML
//! - `ports/` - SyntaxParser trait
//! - `application/` - FragmentParser facade
//! - `infrastructure/` - tree-sitter C# backend, documentation extraction

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::FragmentParser;
pub use domain::*;
pub use ports::SyntaxParser;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::TreeSitterCSharpParser;
