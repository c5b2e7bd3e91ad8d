//! Shared behaviour.

use std::fmt;

use crate::koan::*;

trait Greet {
    fn name(&self) -> String;

    fn greet(&self) -> String {
        format!("Hello, {}", self.name())
    }
}

struct Student;
struct Master;

impl Greet for Student {
    fn name(&self) -> String {
        "student".to_string()
    }
}

impl Greet for Master {
    fn name(&self) -> String {
        "master".to_string()
    }

    fn greet(&self) -> String {
        "...".to_string()
    }
}

fn test_default_methods() -> KoanResult {
    let greeting = Student.greet();

    // What does the student say? "Hello, student"
    assert_equal(___()?, greeting.as_str())
}

fn test_overridden_methods() -> KoanResult {
    let greeting = Master.greet();

    // What does the master say? "..."
    assert_equal(___()?, greeting.as_str())
}

fn test_trait_objects() -> KoanResult {
    let people: Vec<Box<dyn Greet>> = vec![Box::new(Student), Box::new(Master)];
    let names: Vec<String> = people.iter().map(|p| p.name()).collect();

    // Which names are listed? vec!["student".to_string(), "master".to_string()]
    assert_equal(___()?, names)
}

fn test_display() -> KoanResult {
    struct Temperature(i32);

    impl fmt::Display for Temperature {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}°C", self.0)
        }
    }

    let shown = Temperature(21).to_string();

    // What is the displayed temperature? "21°C"
    assert_equal(___()?, shown.as_str())
}

fn test_generic_bounds() -> KoanResult {
    fn largest<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
        values.iter().copied().fold(None, |best, v| match best {
            Some(b) if b >= v => Some(b),
            _ => Some(v),
        })
    }

    // What is the largest value? Some(9)
    assert_equal(__()?, largest(&[3, 9, 4]))
}

fn test_derived_defaults() -> KoanResult {
    #[derive(Default)]
    struct Settings {
        verbose: bool,
        level: u8,
    }

    let settings = Settings::default();

    // What is the default level? 0
    assert_equal(__()?, settings.level)?;
    // Is verbose on by default? false
    assert_equal(__()?, settings.verbose)
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutTraits", file!())
        .koan("test_default_methods", test_default_methods)
        .koan("test_overridden_methods", test_overridden_methods)
        .koan("test_trait_objects", test_trait_objects)
        .koan("test_display", test_display)
        .koan("test_generic_bounds", test_generic_bounds)
        .koan("test_derived_defaults", test_derived_defaults)
}
