//! Growable arrays.

use crate::koan::*;

fn test_creating_vectors() -> KoanResult {
    let v = vec![1, 2, 3];

    // How many elements does v hold? 3
    assert_equal(__()?, v.len())
}

fn test_indexing() -> KoanResult {
    let v = [10, 20, 30];

    // What is v[1]? 20
    assert_equal(__()?, v[1])
}

fn test_get_returns_an_option() -> KoanResult {
    let v = vec![10, 20, 30];

    // What does get(5) return? None
    assert_equal(__()?, v.get(5))
}

fn test_push_and_pop() -> KoanResult {
    let mut v = vec![1];
    v.push(2);
    v.push(3);
    let last = v.pop();

    // What is the value pop returned? Some(3)
    assert_equal(__()?, last)?;
    // What is left in v? vec![1, 2]
    assert_equal(___()?, v)
}

fn test_vectors_compare_deeply() -> KoanResult {
    let a = vec![vec![1, 2], vec![3]];
    let b = vec![vec![1, 2], vec![3]];

    // Is a equal to b? true
    assert_equal(__()?, a == b)
}

fn test_sort_and_dedup() -> KoanResult {
    let mut v = vec![3, 1, 3, 2, 1];
    v.sort_unstable();
    v.dedup();

    // What is v now? vec![1, 2, 3]
    assert_equal(___()?, v)
}

fn test_out_of_bounds_panics() -> KoanResult {
    let v = vec![1, 2, 3];
    assert_panics(move || {
        let _missing = v[10];
    })
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutVectors", file!())
        .koan("test_creating_vectors", test_creating_vectors)
        .koan("test_indexing", test_indexing)
        .koan("test_get_returns_an_option", test_get_returns_an_option)
        .koan("test_push_and_pop", test_push_and_pop)
        .koan("test_vectors_compare_deeply", test_vectors_compare_deeply)
        .koan("test_sort_and_dedup", test_sort_and_dedup)
        .koan("test_out_of_bounds_panics", test_out_of_bounds_panics)
}
