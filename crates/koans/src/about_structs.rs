//! Grouping data under one name.

use crate::koan::*;

#[derive(Debug, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    const fn manhattan(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

fn test_fields() -> KoanResult {
    let p = Point::new(3, -4);

    // What is p.x? 3
    assert_equal(__()?, p.x)
}

fn test_methods() -> KoanResult {
    // What is the manhattan distance of (3, -4)? 7
    assert_equal(__()?, Point::new(3, -4).manhattan())
}

fn test_struct_update_syntax() -> KoanResult {
    let origin = Point::new(0, 0);
    let moved = Point { y: 5, ..origin };

    // What is moved? Point::new(0, 5)
    assert_equal(___()?, moved)
}

fn test_structs_compare_by_value() -> KoanResult {
    // Is Point::new(1, 2) equal to Point::new(1, 2)? true
    assert_equal(__()?, Point::new(1, 2) == Point::new(1, 2))
}

fn test_tuple_structs() -> KoanResult {
    struct Meters(f64);
    let distance = Meters(2.5);

    // What is inside the Meters? 2.5
    assert_equal(__()?, distance.0)
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutStructs", file!())
        .koan("test_fields", test_fields)
        .koan("test_methods", test_methods)
        .koan("test_struct_update_syntax", test_struct_update_syntax)
        .koan("test_structs_compare_by_value", test_structs_compare_by_value)
        .koan("test_tuple_structs", test_tuple_structs)
}
