//! The koans
//!
//! Each lesson is a file of small tests with blanks in them. Replace every
//! `__()` and `___()` call, question mark included, with the value that
//! makes the koan pass, then walk the path again.
//!
//! This file registers every lesson; the order they are walked in comes from
//! `curriculum.json`.

pub mod koan;

mod about_asserts;
mod about_closures;
mod about_enums;
mod about_hashmaps;
mod about_iterators;
mod about_options;
mod about_ownership;
mod about_results;
mod about_strings;
mod about_structs;
mod about_traits;
mod about_types;
mod about_vectors;

use koans_runtime::{Curriculum, Lesson, PathWalker, Result};

/// The curriculum artifact.
pub const CURRICULUM_JSON: &str = include_str!("curriculum.json");

/// Parses the embedded curriculum.
///
/// # Errors
///
/// Returns an error if `curriculum.json` is malformed.
pub fn curriculum() -> Result<Curriculum> {
    Curriculum::from_json(CURRICULUM_JSON)
}

/// Looks up a lesson by its curriculum id.
pub fn lesson(id: &str) -> Option<Lesson> {
    let lesson = match id {
        "about_asserts" => about_asserts::lesson(),
        "about_types" => about_types::lesson(),
        "about_strings" => about_strings::lesson(),
        "about_vectors" => about_vectors::lesson(),
        "about_options" => about_options::lesson(),
        "about_results" => about_results::lesson(),
        "about_structs" => about_structs::lesson(),
        "about_enums" => about_enums::lesson(),
        "about_traits" => about_traits::lesson(),
        "about_closures" => about_closures::lesson(),
        "about_iterators" => about_iterators::lesson(),
        "about_hashmaps" => about_hashmaps::lesson(),
        "about_ownership" => about_ownership::lesson(),
        _ => return None,
    };
    Some(lesson)
}

/// The whole path, ready to walk.
///
/// # Errors
///
/// Returns an error if the curriculum is malformed or names a lesson that is
/// not registered here.
pub fn path() -> Result<PathWalker> {
    PathWalker::from_curriculum(&curriculum()?, lesson)
}
