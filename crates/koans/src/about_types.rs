//! Numbers, characters and tuples.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::koan::*;

fn test_integers_have_sizes() -> KoanResult {
    // What is the largest value a u8 can hold? 255
    assert_equal(__()?, u8::MAX)
}

fn test_integer_division_truncates() -> KoanResult {
    // What is 7 / 2 for integers? 3
    assert_equal(__()?, 7 / 2)
}

fn test_floats_keep_the_fraction() -> KoanResult {
    // What is 7.0 / 2.0? 3.5
    assert_equal(__()?, 7.0 / 2.0)
}

fn test_casting_with_as() -> KoanResult {
    let big: i32 = 300;

    // What does 300 become as a u8? 44
    assert_equal(__()?, big as u8)
}

fn test_checked_arithmetic() -> KoanResult {
    // What does checked_add return when a u8 overflows? None
    assert_equal(__()?, 250_u8.checked_add(10))
}

fn test_chars_are_unicode() -> KoanResult {
    // How many bytes does 'é' take in UTF-8? 2
    assert_equal(__()?, 'é'.len_utf8())
}

fn test_tuples() -> KoanResult {
    let tuple = (1, "two", 3.0);

    // What is the second element of the tuple? "two"
    assert_equal(__()?, tuple.1)
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutTypes", file!())
        .koan("test_integers_have_sizes", test_integers_have_sizes)
        .koan("test_integer_division_truncates", test_integer_division_truncates)
        .koan("test_floats_keep_the_fraction", test_floats_keep_the_fraction)
        .koan("test_casting_with_as", test_casting_with_as)
        .koan("test_checked_arithmetic", test_checked_arithmetic)
        .koan("test_chars_are_unicode", test_chars_are_unicode)
        .koan("test_tuples", test_tuples)
}
