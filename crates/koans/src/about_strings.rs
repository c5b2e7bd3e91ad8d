//! `String` owns its text, `&str` borrows it.

use crate::koan::*;

fn test_length_counts_bytes() -> KoanResult {
    // What is the length of "koan"? 4
    assert_equal(__()?, "koan".len())
}

fn test_push_str() -> KoanResult {
    let mut greeting = String::from("Hello");
    greeting.push_str(", world");

    // What is the greeting now? "Hello, world"
    assert_equal(__()?, greeting.as_str())
}

fn test_format_macro() -> KoanResult {
    let name = "Sensei";

    let greeting = format!("Hi, {name}!");

    // What does format! produce? "Hi, Sensei!"
    assert_equal(___()?, greeting.as_str())
}

fn test_contains() -> KoanResult {
    // Contains "path" or not? true
    assert_equal(__()?, "the path".contains("path"))
}

fn test_split_whitespace() -> KoanResult {
    let words: Vec<&str> = "the quiet mind".split_whitespace().collect();

    // How many words are there? 3
    assert_equal(__()?, words.len())
}

fn test_chars_are_not_bytes() -> KoanResult {
    let word = "naïve";

    // Does the char count equal the byte count? false
    assert_equal(__()?, word.chars().count() == word.len())
}

fn test_uppercase() -> KoanResult {
    let loud = "zen".to_uppercase();

    // What is "zen" in uppercase? "ZEN"
    assert_equal(___()?, loud.as_str())
}

fn test_slicing() -> KoanResult {
    let word = "enlightenment";

    // What is the slice of the first five bytes? "enlig"
    assert_equal(__()?, &word[..5])
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutStrings", file!())
        .koan("test_length_counts_bytes", test_length_counts_bytes)
        .koan("test_push_str", test_push_str)
        .koan("test_format_macro", test_format_macro)
        .koan("test_contains", test_contains)
        .koan("test_split_whitespace", test_split_whitespace)
        .koan("test_chars_are_not_bytes", test_chars_are_not_bytes)
        .koan("test_uppercase", test_uppercase)
        .koan("test_slicing", test_slicing)
}
