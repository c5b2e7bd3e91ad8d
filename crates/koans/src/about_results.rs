//! Operations that can fail say so in their type.

use crate::koan::*;

fn test_ok_values() -> KoanResult {
    let parsed = "42".parse::<i32>();

    // Is the parse ok? true
    assert_equal(__()?, parsed.is_ok())
}

fn test_err_values() -> KoanResult {
    let parsed = "forty-two".parse::<i32>();

    // Is the parse an error? true
    assert_equal(__()?, parsed.is_err())
}

fn test_question_mark_propagates() -> KoanResult {
    let value: i32 = "21".parse()?;

    // What is value * 2? 42
    assert_equal(__()?, value * 2)
}

fn test_map_err() -> KoanResult {
    let result: Result<i32, String> = Err("bad".to_string());
    let mapped = result.map_err(|e| e.len());

    // What does map_err produce? Err(3)
    assert_equal(__()?, mapped)
}

fn test_unwrap_or_else() -> KoanResult {
    let result: Result<usize, &str> = Err("nope");

    // What is the value that comes back? 4
    assert_equal(__()?, result.unwrap_or_else(str::len))
}

fn test_and_then_chains() -> KoanResult {
    let halve = |x: i32| {
        if x % 2 == 0 {
            Ok(x / 2)
        } else {
            Err(format!("{x} is odd"))
        }
    };

    // What does halving 8 twice give? Ok(2)
    assert_equal(__()?, halve(8).and_then(halve))?;
    // What does halving 6 twice give? Err("3 is odd".to_string())
    assert_equal(___()?, halve(6).and_then(halve))
}

fn test_foreign_errors() -> KoanResult {
    let bytes = [0xE7, 0xA6, 0x85];
    let text = std::str::from_utf8(&bytes).or_unexpected()?;

    // How many chars does the text hold? 1
    assert_equal(__()?, text.chars().count())
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutResults", file!())
        .koan("test_ok_values", test_ok_values)
        .koan("test_err_values", test_err_values)
        .koan("test_question_mark_propagates", test_question_mark_propagates)
        .koan("test_map_err", test_map_err)
        .koan("test_unwrap_or_else", test_unwrap_or_else)
        .koan("test_and_then_chains", test_and_then_chains)
        .koan("test_foreign_errors", test_foreign_errors)
}
