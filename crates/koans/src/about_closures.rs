//! Functions that remember where they were made.

use crate::koan::*;

fn test_closures_capture() -> KoanResult {
    let offset = 10;
    let add_offset = |x: i32| x + offset;

    // What is add_offset(5)? 15
    assert_equal(__()?, add_offset(5))
}

fn test_fnmut_changes_state() -> KoanResult {
    let mut count = 0;
    let mut tick = || count += 1;
    tick();
    tick();
    tick();

    // How many ticks were counted? 3
    assert_equal(__()?, count)
}

fn test_move_closures() -> KoanResult {
    let word = String::from("zen");
    let shout = move || word.to_uppercase();

    let shouted = shout();

    // What does shout return? "ZEN"
    assert_equal(___()?, shouted.as_str())
}

fn test_closures_as_arguments() -> KoanResult {
    fn apply_twice(f: impl Fn(i32) -> i32, x: i32) -> i32 {
        f(f(x))
    }

    // What is 3 doubled twice? 12
    assert_equal(__()?, apply_twice(|x| x * 2, 3))
}

fn test_returning_closures() -> KoanResult {
    fn multiplier(factor: i32) -> impl Fn(i32) -> i32 {
        move |x| x * factor
    }
    let triple = multiplier(3);

    // What is triple(7)? 21
    assert_equal(__()?, triple(7))
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutClosures", file!())
        .koan("test_closures_capture", test_closures_capture)
        .koan("test_fnmut_changes_state", test_fnmut_changes_state)
        .koan("test_move_closures", test_move_closures)
        .koan("test_closures_as_arguments", test_closures_as_arguments)
        .koan("test_returning_closures", test_returning_closures)
}
