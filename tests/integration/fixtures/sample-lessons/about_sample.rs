use crate::koan::*;

fn test_result() -> KoanResult {
    // What is the result? 4
    assert_equal(__()?, 2 + 2)
}

fn test_length() -> KoanResult {
    // How many letters are in "zen"? 3
    assert_equal(__()?, "zen".len())
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutSample", file!())
        .koan("test_result", test_result)
        .koan("test_length", test_length)
}
