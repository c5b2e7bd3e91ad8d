//! Lessons and the koans they register.
//!
//! A lesson is an ordered list of `(name, fn)` pairs, registered explicitly:
//!
//! ```
//! use koans_runtime::prelude::*;
//!
//! fn test_truth() -> KoanResult {
//!     assert_true(true)
//! }
//!
//! fn test_equality() -> KoanResult {
//!     assert_equal(2, 1 + 1)
//! }
//!
//! let lesson = Lesson::new("AboutAsserts", file!())
//!     .koan("test_truth", test_truth)
//!     .koan("test_equality", test_equality);
//!
//! assert_eq!(lesson.test_methods(), vec!["test_truth", "test_equality"]);
//! assert!(lesson.meditate_on_single("test_equality").is_passed());
//! ```
//!
//! Registration order is the order the walker follows.

use std::any::Any;
use std::collections::HashSet;
use std::panic;

use koans_report::FailureKind;

use crate::error::{KoanError, KoanResult, KoansError, Result};
use crate::placeholder::PlaceholderKind;

/// Every koan name starts with this prefix.
pub const TEST_PREFIX: &str = "test_";

/// Signature of a koan.
pub type KoanFn = fn() -> KoanResult;

// ============================================================================
// TestOutcome
// ============================================================================

/// What happened when a koan was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// The koan completed normally.
    Passed,
    /// An assertion failed, the koan panicked, or the koan does not exist.
    Failed(KoanError),
    /// The koan reached a placeholder.
    Unsolved(PlaceholderKind),
}

impl TestOutcome {
    /// Returns `true` for [`TestOutcome::Passed`].
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// The failure message, if the koan did not pass.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Passed => None,
            Self::Failed(err) => Some(err.to_string()),
            Self::Unsolved(placeholder) => Some(KoanError::unsolved(*placeholder).to_string()),
        }
    }

    /// The report category, if the koan did not pass.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Passed => None,
            Self::Failed(err) => Some(err.kind()),
            Self::Unsolved(_) => Some(FailureKind::Unsolved),
        }
    }
}

impl From<KoanResult> for TestOutcome {
    fn from(result: KoanResult) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(KoanError::Unsolved { placeholder }) => Self::Unsolved(placeholder),
            Err(err) => Self::Failed(err),
        }
    }
}

// ============================================================================
// TestCase
// ============================================================================

/// A named koan.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    name: &'static str,
    run: KoanFn,
}

impl TestCase {
    /// The koan's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the koan, turning a panic into [`KoanError::Unexpected`].
    pub fn meditate(&self) -> TestOutcome {
        match panic::catch_unwind(self.run) {
            Ok(result) => result.into(),
            Err(payload) => TestOutcome::Failed(KoanError::unexpected(panic_message(
                payload.as_ref(),
            ))),
        }
    }
}

/// Extracts the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "the koan panicked".to_string()
    }
}

// ============================================================================
// Lesson
// ============================================================================

/// A named collection of koans on one topic.
#[derive(Debug, Clone)]
pub struct Lesson {
    name: &'static str,
    file: &'static str,
    cases: Vec<TestCase>,
}

impl Lesson {
    /// Creates an empty lesson.
    ///
    /// `file` is the source file shown to the student on failure; lessons pass
    /// `file!()`.
    #[must_use]
    pub const fn new(name: &'static str, file: &'static str) -> Self {
        Self {
            name,
            file,
            cases: Vec::new(),
        }
    }

    /// Registers a koan after the ones already registered.
    #[must_use]
    pub fn koan(mut self, name: &'static str, run: KoanFn) -> Self {
        self.cases.push(TestCase { name, run });
        self
    }

    /// The lesson's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The lesson's source file.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Names of the lesson's koans, in registration order.
    #[must_use]
    pub fn test_methods(&self) -> Vec<&'static str> {
        self.cases.iter().map(TestCase::name).collect()
    }

    /// Number of registered koans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if no koan is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Runs exactly one koan by name.
    pub fn meditate_on_single(&self, name: &str) -> TestOutcome {
        match self.cases.iter().find(|case| case.name == name) {
            Some(case) => {
                tracing::debug!(lesson = self.name, koan = name, "Meditating");
                case.meditate()
            }
            None => TestOutcome::Failed(KoanError::unknown_koan(self.name, name)),
        }
    }

    /// Checks the registration: at least one koan, every name starts with
    /// [`TEST_PREFIX`], no name registered twice.
    ///
    /// # Errors
    ///
    /// Returns [`KoansError::InvalidLesson`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.cases.is_empty() {
            return Err(KoansError::invalid_lesson(
                self.name,
                "no koans are registered",
            ));
        }

        let mut seen = HashSet::new();
        for case in &self.cases {
            if !case.name.starts_with(TEST_PREFIX) {
                return Err(KoansError::invalid_lesson(
                    self.name,
                    format!("koan '{}' must start with '{TEST_PREFIX}'", case.name),
                ));
            }
            if !seen.insert(case.name) {
                return Err(KoansError::invalid_lesson(
                    self.name,
                    format!("koan '{}' is registered twice", case.name),
                ));
            }
        }

        Ok(())
    }
}
