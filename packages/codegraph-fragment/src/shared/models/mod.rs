//! Shared models

mod error;
mod span;

pub use error::{FragmentError, Result};
pub use span::Span;
