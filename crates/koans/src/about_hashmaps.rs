//! Keys to values.

use std::collections::HashMap;

use crate::koan::*;

fn test_insert_and_get() -> KoanResult {
    let mut ages = HashMap::new();
    ages.insert("ada", 36);

    // What is ada's age? Some(&36)
    assert_equal(__()?, ages.get("ada"))
}

fn test_missing_keys() -> KoanResult {
    let ages: HashMap<&str, i32> = HashMap::new();

    // What does get return for a missing key? None
    assert_equal(__()?, ages.get("nobody"))
}

fn test_entry_api() -> KoanResult {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in "banana".chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    // How many times does 'a' appear? 3
    assert_equal(__()?, counts[&'a'])
}

fn test_maps_compare_by_contents() -> KoanResult {
    let a: HashMap<_, _> = [("x", 1), ("y", 2)].into_iter().collect();
    let b: HashMap<_, _> = [("y", 2), ("x", 1)].into_iter().collect();

    // Is a equal to b, whatever the insertion order? true
    assert_equal(__()?, a == b)
}

fn test_remove() -> KoanResult {
    let mut map: HashMap<i32, &str> = (1..=3).map(|i| (i, "x")).collect();
    let removed = map.remove(&2);

    // What is returned by remove? Some("x")
    assert_equal(__()?, removed)?;
    // How many entries remain? 2
    assert_equal(__()?, map.len())
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutHashmaps", file!())
        .koan("test_insert_and_get", test_insert_and_get)
        .koan("test_missing_keys", test_missing_keys)
        .koan("test_entry_api", test_entry_api)
        .koan("test_maps_compare_by_contents", test_maps_compare_by_contents)
        .koan("test_remove", test_remove)
}
