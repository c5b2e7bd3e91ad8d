//! A value that might not be there.

#![allow(clippy::unwrap_used, clippy::unnecessary_literal_unwrap)]

use crate::koan::*;

fn test_some_and_none() -> KoanResult {
    let something: Option<i32> = Some(5);

    // Is something present? true
    assert_equal(__()?, something.is_some())
}

fn test_unwrap_or() -> KoanResult {
    let nothing: Option<i32> = None;

    // What does unwrap_or give back? 7
    assert_equal(__()?, nothing.unwrap_or(7))
}

fn test_map() -> KoanResult {
    let maybe = Some(3);

    // What is the mapped value? Some(6)
    assert_equal(__()?, maybe.map(|x| x * 2))
}

fn test_pattern_matching() -> KoanResult {
    let value = Some("koan");
    let seen = match value {
        Some(text) => text.len(),
        None => 0,
    };

    // How many bytes did the match see? 4
    assert_equal(__()?, seen)
}

fn test_question_mark_on_option() -> KoanResult {
    fn first_even(values: &[i32]) -> Option<i32> {
        let first = values.first()?;
        if first % 2 == 0 {
            Some(*first)
        } else {
            None
        }
    }

    // What does first_even return for an empty slice? None
    assert_equal(__()?, first_even(&[]))?;
    // What does first_even return for [4, 5]? Some(4)
    assert_equal(__()?, first_even(&[4, 5]))
}

fn test_unwrap_on_none_panics() -> KoanResult {
    let nothing: Option<i32> = None;
    assert_panics(move || {
        let _value = nothing.unwrap();
    })
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutOptions", file!())
        .koan("test_some_and_none", test_some_and_none)
        .koan("test_unwrap_or", test_unwrap_or)
        .koan("test_map", test_map)
        .koan("test_pattern_matching", test_pattern_matching)
        .koan("test_question_mark_on_option", test_question_mark_on_option)
        .koan("test_unwrap_on_none_panics", test_unwrap_on_none_panics)
}
