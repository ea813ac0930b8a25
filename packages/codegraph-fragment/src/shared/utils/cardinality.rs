//! Exactly-one unwrapping
//!
//! Shared by parameter, using-directive and documentation parsing. Anything
//! other than one element is a `CardinalityViolation`.

use crate::shared::models::{FragmentError, Result};

/// Unwrap the only item of `items`, or report how many there were
pub fn exactly_one<I>(items: I, element: &'static str) -> Result<I::Item>
where
    I: IntoIterator,
{
    let mut iter = items.into_iter();
    match iter.next() {
        None => Err(FragmentError::cardinality(element, 0)),
        Some(item) => match iter.count() {
            0 => Ok(item),
            extra => Err(FragmentError::cardinality(element, extra + 1)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_single() {
        assert_eq!(exactly_one(vec![7], "number").unwrap(), 7);
    }

    #[test]
    fn test_exactly_one_empty() {
        let err = exactly_one(Vec::<u8>::new(), "number").unwrap_err();
        assert!(matches!(
            err,
            FragmentError::CardinalityViolation { found: 0, .. }
        ));
    }

    #[test]
    fn test_exactly_one_many() {
        let err = exactly_one([1, 2, 3], "number").unwrap_err();
        assert!(matches!(
            err,
            FragmentError::CardinalityViolation {
                element: "number",
                expected: 1,
                found: 3
            }
        ));
    }
}
