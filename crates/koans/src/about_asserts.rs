//! Before anything else, learn how the master checks your answers.

use crate::koan::*;

fn test_assert_truth() -> KoanResult {
    // Is this statement true? true
    assert_true(__()?)
}

fn test_assert_with_a_message() -> KoanResult {
    // Which boolean makes the message go away? true
    assert_true_msg(__()?, "This should be true -- Please fix this")
}

fn test_fill_in_values() -> KoanResult {
    // What is 1 + 1? 2
    assert_equal(__()?, 1 + 1)
}

fn test_assert_equality() -> KoanResult {
    let actual_value = 1 + 1;

    // What is the expected value? 2
    let expected_value = __()?;
    assert_equal(expected_value, actual_value)
}

fn test_assert_inequality() -> KoanResult {
    // Which number is not 3? 4
    assert_not_equal(__()?, 3)
}

fn test_some_operations_fail() -> KoanResult {
    assert_throws(|| "not a number".parse::<i32>())
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutAsserts", file!())
        .koan("test_assert_truth", test_assert_truth)
        .koan("test_assert_with_a_message", test_assert_with_a_message)
        .koan("test_fill_in_values", test_fill_in_values)
        .koan("test_assert_equality", test_assert_equality)
        .koan("test_assert_inequality", test_assert_inequality)
        .koan("test_some_operations_fail", test_some_operations_fail)
}
