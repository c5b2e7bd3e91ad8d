//! The curriculum: the one ordered list of lessons.
//!
//! The order is read once from a JSON artifact of the form
//!
//! ```json
//! { "lessons": ["about_asserts", "about_types"] }
//! ```
//!
//! and cannot be changed afterwards. Lesson ids are resolved to [`Lesson`]s by
//! a lookup function the content crate provides.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{KoansError, Result};
use crate::lesson::Lesson;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CurriculumFile {
    lessons: Vec<String>,
}

/// Ordered, validated list of lesson ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    lessons: Vec<String>,
}

impl Curriculum {
    /// Parses and validates a curriculum artifact.
    ///
    /// # Errors
    ///
    /// Returns `KoansError::CurriculumParseError` for malformed JSON,
    /// `KoansError::EmptyCurriculum` when no lesson is listed and
    /// `KoansError::DuplicateLesson` when an id repeats.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CurriculumFile =
            serde_json::from_str(json).map_err(|e| KoansError::curriculum_parse(e.to_string()))?;
        Self::new(file.lessons)
    }

    /// Builds a curriculum from ids, in the given order.
    ///
    /// # Errors
    ///
    /// Same validation as [`Curriculum::from_json`].
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lessons: Vec<String> = ids.into_iter().map(Into::into).collect();

        if lessons.is_empty() {
            return Err(KoansError::EmptyCurriculum);
        }

        let mut seen = HashSet::new();
        for id in &lessons {
            if id.trim().is_empty() {
                return Err(KoansError::curriculum_parse("lesson ids must not be empty"));
            }
            if !seen.insert(id.as_str()) {
                return Err(KoansError::duplicate_lesson(id));
            }
        }

        Ok(Self { lessons })
    }

    /// Lesson ids in curriculum order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.lessons.iter().map(String::as_str)
    }

    /// Number of lessons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always `false`; an empty curriculum is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Instantiates every lesson, in order, through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `KoansError::UnknownLesson` for an id `lookup` cannot resolve
    /// and `KoansError::InvalidLesson` for a lesson whose registration is
    /// invalid.
    pub fn instantiate<F>(&self, lookup: F) -> Result<Vec<Lesson>>
    where
        F: Fn(&str) -> Option<Lesson>,
    {
        self.ids()
            .map(|id| {
                let lesson = lookup(id).ok_or_else(|| KoansError::unknown_lesson(id))?;
                lesson.validate()?;
                tracing::debug!(id, lesson = lesson.name(), koans = lesson.len(), "Lesson loaded");
                Ok(lesson)
            })
            .collect()
    }
}
