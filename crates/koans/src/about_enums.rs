//! One of several shapes, and `match` to tell them apart.

use std::f64::consts::PI;

use crate::koan::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

enum Shape {
    Circle { radius: f64 },
    Square(f64),
}

impl Shape {
    fn area(&self) -> f64 {
        match self {
            Self::Circle { radius } => PI * radius * radius,
            Self::Square(side) => side * side,
        }
    }
}

fn test_enum_variants() -> KoanResult {
    // What is North turned right? Direction::East
    assert_equal(__()?, Direction::North.turn_right())
}

fn test_turning_all_the_way_around() -> KoanResult {
    let mut facing = Direction::West;
    for _ in 0..4 {
        facing = facing.turn_right();
    }

    // Where do we face after four right turns? Direction::West
    assert_equal(__()?, facing)
}

fn test_enums_carry_data() -> KoanResult {
    // What is the area of a 3 by 3 square? 9.0
    assert_equal(__()?, Shape::Square(3.0).area())
}

fn test_matches_macro() -> KoanResult {
    let shape = Shape::Circle { radius: 1.0 };

    // Is the shape a circle? true
    assert_equal(__()?, matches!(shape, Shape::Circle { .. }))?;
    // Is its area larger than 3? true
    assert_equal(__()?, shape.area() > 3.0)
}

fn test_discriminants() -> KoanResult {
    // What is the discriminant of South? 2
    assert_equal(__()?, Direction::South as i32)
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutEnums", file!())
        .koan("test_enum_variants", test_enum_variants)
        .koan("test_turning_all_the_way_around", test_turning_all_the_way_around)
        .koan("test_enums_carry_data", test_enums_carry_data)
        .koan("test_matches_macro", test_matches_macro)
        .koan("test_discriminants", test_discriminants)
}
