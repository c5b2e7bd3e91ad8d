//! Lazy sequences and the adapters that shape them.

use crate::koan::*;

fn test_map_and_collect() -> KoanResult {
    let squares: Vec<i32> = (1..=4).map(|x| x * x).collect();

    // What is the list of squares? vec![1, 4, 9, 16]
    assert_equal(___()?, squares)
}

fn test_filter() -> KoanResult {
    let evens: Vec<i32> = (1..10).filter(|x| x % 2 == 0).collect();

    // Which numbers survive the filter? vec![2, 4, 6, 8]
    assert_equal(___()?, evens)
}

fn test_sum() -> KoanResult {
    // What is the sum of 1 to 10? 55
    assert_equal(__()?, (1..=10).sum::<i32>())
}

fn test_iterators_are_lazy() -> KoanResult {
    let mut calls = 0;
    {
        let _unused = (1..=3).map(|x| {
            calls += 1;
            x
        });
    }

    // How many times did the closure run? 0
    assert_equal(__()?, calls)
}

fn test_enumerate() -> KoanResult {
    let names = ["a", "b"];
    let pairs: Vec<(usize, &str)> = names.iter().copied().enumerate().collect();

    // What does enumerate give? vec![(0, "a"), (1, "b")]
    assert_equal(___()?, pairs)
}

fn test_fold() -> KoanResult {
    let word = ["k", "o", "a", "n"]
        .iter()
        .fold(String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });

    // What does fold build? "koan"
    assert_equal(___()?, word.as_str())
}

fn test_any_and_all() -> KoanResult {
    let values = [2, 4, 7];

    // Does any value exceed 5? true
    assert_equal(__()?, values.iter().any(|v| *v > 5))?;
    // Is every value even? false
    assert_equal(__()?, values.iter().all(|v| v % 2 == 0))
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutIterators", file!())
        .koan("test_map_and_collect", test_map_and_collect)
        .koan("test_filter", test_filter)
        .koan("test_sum", test_sum)
        .koan("test_iterators_are_lazy", test_iterators_are_lazy)
        .koan("test_enumerate", test_enumerate)
        .koan("test_fold", test_fold)
        .koan("test_any_and_all", test_any_and_all)
}
