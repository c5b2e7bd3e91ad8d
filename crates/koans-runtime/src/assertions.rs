//! Assertions available to every koan.
//!
//! Each assertion returns a [`KoanResult`] so a koan can chain them with `?`
//! and end on the last one. The `_msg` variants prefix the failure with a
//! custom message.
//!
//! Equality is structural: [`assert_equal`] goes through `PartialEq`, so two
//! distinct vectors or maps with the same contents are equal, and any nested
//! element, key or value that differs makes them unequal.

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use crate::error::{KoanError, KoanResult};

/// Fails unless `condition` holds.
pub fn assert_true(condition: bool) -> KoanResult {
    assert_true_msg(condition, "Expected the condition to be true")
}

/// Fails with `message` unless `condition` holds.
pub fn assert_true_msg(condition: bool, message: &str) -> KoanResult {
    if condition {
        Ok(())
    } else {
        Err(KoanError::assertion(message))
    }
}

/// Fails unless `expected == actual`.
pub fn assert_equal<T: PartialEq + Debug>(expected: T, actual: T) -> KoanResult {
    check_equal(None, &expected, &actual)
}

/// Fails with `message` unless `expected == actual`.
pub fn assert_equal_msg<T: PartialEq + Debug>(expected: T, actual: T, message: &str) -> KoanResult {
    check_equal(Some(message), &expected, &actual)
}

/// Fails if `expected == actual`.
pub fn assert_not_equal<T: PartialEq + Debug>(expected: T, actual: T) -> KoanResult {
    check_not_equal(None, &expected, &actual)
}

/// Fails with `message` if `expected == actual`.
pub fn assert_not_equal_msg<T: PartialEq + Debug>(
    expected: T,
    actual: T,
    message: &str,
) -> KoanResult {
    check_not_equal(Some(message), &expected, &actual)
}

/// Fails unless `operation` returns an error or panics.
pub fn assert_throws<T, E, F>(operation: F) -> KoanResult
where
    F: FnOnce() -> Result<T, E>,
{
    assert_throws_msg(operation, "Expected the operation to fail")
}

/// Fails with `message` unless `operation` returns an error or panics.
pub fn assert_throws_msg<T, E, F>(operation: F, message: &str) -> KoanResult
where
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(_)) => Err(KoanError::assertion(message)),
        Ok(Err(_)) | Err(_) => Ok(()),
    }
}

/// Fails unless `operation` panics.
pub fn assert_panics<F: FnOnce() + UnwindSafe>(operation: F) -> KoanResult {
    assert_panics_msg(operation, "Expected the operation to panic")
}

/// Fails with `message` unless `operation` panics.
pub fn assert_panics_msg<F: FnOnce() + UnwindSafe>(operation: F, message: &str) -> KoanResult {
    match panic::catch_unwind(operation) {
        Ok(()) => Err(KoanError::assertion(message)),
        Err(_) => Ok(()),
    }
}

fn check_equal<T: PartialEq + Debug>(message: Option<&str>, expected: &T, actual: &T) -> KoanResult {
    if expected == actual {
        return Ok(());
    }

    let expected = format!("{expected:?}");
    let actual = format!("{actual:?}");
    let detail = format!("Expected {expected} but got {actual}");
    Err(KoanError::mismatch(with_prefix(message, detail), expected, actual))
}

fn check_not_equal<T: PartialEq + Debug>(
    message: Option<&str>,
    expected: &T,
    actual: &T,
) -> KoanResult {
    if expected != actual {
        return Ok(());
    }

    let expected = format!("{expected:?}");
    let actual = format!("{actual:?}");
    let detail = format!("Expected {actual} to differ from {expected}");
    Err(KoanError::mismatch(with_prefix(message, detail), expected, actual))
}

fn with_prefix(message: Option<&str>, detail: String) -> String {
    match message {
        Some(message) => format!("{message}\n{detail}"),
        None => detail,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn test_assert_true() {
        assert!(assert_true(true).is_ok());
        assert_eq!(
            assert_true(false),
            Err(KoanError::assertion("Expected the condition to be true"))
        );
    }

    #[test]
    fn test_assert_true_msg() {
        assert_eq!(
            assert_true_msg(false, "the sky is blue"),
            Err(KoanError::assertion("the sky is blue"))
        );
    }

    #[test]
    fn test_assert_equal_primitives() {
        assert!(assert_equal(4, 2 + 2).is_ok());
        assert!(assert_equal("koan", "koan").is_ok());
        assert!(assert_equal(4, 5).is_err());
    }

    #[test]
    fn test_assert_equal_failure_carries_both_values() {
        let err = assert_equal("a", "b").unwrap_err();
        assert_eq!(
            err,
            KoanError::mismatch("Expected \"a\" but got \"b\"", "\"a\"", "\"b\"")
        );
    }

    #[test]
    fn test_assert_equal_is_deep_for_vectors() {
        let left = vec![vec![1, 2], vec![3]];
        let right = vec![vec![1, 2], vec![3]];
        assert!(assert_equal(&left, &right).is_ok());

        let different = vec![vec![1, 2], vec![4]];
        assert!(assert_equal(&left, &different).is_err());
    }

    #[test]
    fn test_assert_equal_is_deep_for_maps() {
        let mut left = HashMap::new();
        left.insert("a", vec![1, 2]);
        left.insert("b", vec![3]);

        let mut right = HashMap::new();
        right.insert("b", vec![3]);
        right.insert("a", vec![1, 2]);
        assert!(assert_equal(&left, &right).is_ok());

        let mut nested_diff = right.clone();
        nested_diff.insert("b", vec![3, 4]);
        assert!(assert_equal(&left, &nested_diff).is_err());

        let mut extra_key = right;
        extra_key.insert("c", vec![]);
        assert!(assert_equal(&left, &extra_key).is_err());
    }

    #[test]
    fn test_assert_equal_nested_structures() {
        let mut inner = BTreeMap::new();
        inner.insert("depth", Some(vec![(1, "one")]));
        let left = vec![inner.clone()];
        let right = vec![inner];
        assert!(assert_equal(left, right).is_ok());
    }

    #[test]
    fn test_assert_equal_msg_prefixes() {
        let err = assert_equal_msg(1, 2, "numbers").unwrap_err();
        assert_eq!(err.to_string(), "numbers\nExpected 1 but got 2");
    }

    #[test]
    fn test_assert_not_equal_same_value_fails() {
        for x in [0, 1, -7, i32::MAX] {
            assert!(assert_not_equal(x, x).is_err());
        }
        assert!(assert_not_equal("same", "same").is_err());
        assert!(assert_not_equal(true, true).is_err());
    }

    #[test]
    fn test_assert_not_equal_different_values_pass() {
        assert!(assert_not_equal(1, 2).is_ok());
        assert!(assert_not_equal("a", "b").is_ok());
        assert!(assert_not_equal(vec![1], vec![1, 1]).is_ok());
    }

    #[test]
    fn test_assert_throws() {
        assert!(assert_throws(|| "nope".parse::<i32>()).is_ok());
        assert!(assert_throws(|| "42".parse::<i32>()).is_err());
    }

    #[test]
    fn test_assert_throws_counts_panics() {
        assert!(assert_throws(|| -> Result<(), ()> { panic!("boom") }).is_ok());
    }

    #[test]
    fn test_assert_panics() {
        let values = vec![1, 2, 3];
        assert!(assert_panics(move || {
            let _unused = values[10];
        })
        .is_ok());
        assert_eq!(
            assert_panics_msg(|| {}, "should panic"),
            Err(KoanError::assertion("should panic"))
        );
    }
}
