//! Source location types
//!
//! Spans are always expressed in the coordinates of the fragment the caller
//! passed in, never in the coordinates of any scaffold text wrapped around it.

use serde::{Deserialize, Serialize};

/// Span in source code (1-indexed lines, 0-indexed byte columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero span (0:0-0:0)
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(&self, other: &Span) -> Span {
        let (start_line, start_col) =
            (self.start_line, self.start_col).min((other.start_line, other.start_col));
        let (end_line, end_col) = (self.end_line, self.end_col).max((other.end_line, other.end_col));
        Span::new(start_line, start_col, end_line, end_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let a = Span::new(1, 4, 1, 10);
        let b = Span::new(2, 0, 3, 1);
        assert_eq!(a.merge(&b), Span::new(1, 4, 3, 1));
        assert_eq!(b.merge(&a), Span::new(1, 4, 3, 1));
    }
}
