//! Error types for the koans runtime.
//!
//! Two hierarchies live here:
//!
//! - [`KoanError`]: the failure signals a koan raises. The walker stops at the
//!   first one, whatever its variant.
//! - [`KoansError`]: problems with the harness itself (configuration, the
//!   curriculum artifact, lesson registration, I/O).

use std::fmt;
use std::path::PathBuf;

use koans_report::FailureKind;

use crate::placeholder::PlaceholderKind;

/// A specialized `Result` type for harness operations.
pub type Result<T> = std::result::Result<T, KoansError>;

/// The result every koan returns.
pub type KoanResult<T = ()> = std::result::Result<T, KoanError>;

// ============================================================================
// KoanError
// ============================================================================

/// Failure raised while meditating on a koan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KoanError {
    /// An `assert_*` check did not hold.
    #[error("{message}")]
    AssertionFailed {
        /// Human-readable description of what went wrong.
        message: String,
        /// `Debug` rendering of the expected value, when there is one.
        expected: Option<String>,
        /// `Debug` rendering of the actual value, when there is one.
        actual: Option<String>,
    },

    /// A placeholder was reached.
    #[error("You need to replace {placeholder} with a value that makes the koan pass")]
    Unsolved {
        /// Which placeholder was reached.
        placeholder: PlaceholderKind,
    },

    /// The koan panicked or propagated a foreign error.
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// The original error or panic message.
        message: String,
    },

    /// The walker asked a lesson for a koan it does not register.
    #[error("Lesson '{lesson}' has no koan named '{koan}'")]
    UnknownKoan {
        /// Lesson name.
        lesson: String,
        /// Requested koan name.
        koan: String,
    },
}

impl KoanError {
    /// Creates an `AssertionFailed` without expected/actual values.
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Creates an `AssertionFailed` carrying both compared values.
    #[must_use]
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::AssertionFailed {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Creates an `Unsolved` error for the given placeholder.
    #[must_use]
    pub const fn unsolved(placeholder: PlaceholderKind) -> Self {
        Self::Unsolved { placeholder }
    }

    /// Creates an `Unexpected` error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Wraps any error a koan did not expect, keeping its message.
    #[must_use]
    pub fn caught(err: impl fmt::Display) -> Self {
        Self::unexpected(err.to_string())
    }

    /// Creates an `UnknownKoan` error.
    #[must_use]
    pub fn unknown_koan(lesson: impl Into<String>, koan: impl Into<String>) -> Self {
        Self::UnknownKoan {
            lesson: lesson.into(),
            koan: koan.into(),
        }
    }

    /// Report category of this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::AssertionFailed { .. } => FailureKind::Assertion,
            Self::Unsolved { .. } => FailureKind::Unsolved,
            Self::Unexpected { .. } => FailureKind::Unexpected,
            Self::UnknownKoan { .. } => FailureKind::UnknownKoan,
        }
    }
}

macro_rules! caught_from {
    ($($err:ty),+ $(,)?) => {
        $(
            impl From<$err> for KoanError {
                fn from(err: $err) -> Self {
                    Self::caught(err)
                }
            }
        )+
    };
}

caught_from!(
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::char::ParseCharError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    std::fmt::Error,
    std::io::Error,
);

/// `?` for results whose error has no `From` impl into [`KoanError`].
pub trait OrUnexpected<T> {
    /// Maps the error to [`KoanError::Unexpected`].
    fn or_unexpected(self) -> KoanResult<T>;
}

impl<T, E: fmt::Display> OrUnexpected<T> for std::result::Result<T, E> {
    fn or_unexpected(self) -> KoanResult<T> {
        self.map_err(KoanError::caught)
    }
}

// ============================================================================
// KoansError
// ============================================================================

/// Errors raised by the harness around the koans.
#[derive(Debug, thiserror::Error)]
pub enum KoansError {
    /// Invalid JSON in the configuration file.
    #[error("Invalid JSON in config file '{path}': {message}\n\nSuggestion: Validate your koans.json with a JSON linter")]
    ConfigParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {message}\n\nSuggestion: {suggestion}")]
    ConfigValidationError {
        /// Description of the validation failure.
        message: String,
        /// Actionable suggestion for the user.
        suggestion: String,
    },

    /// The curriculum artifact is not valid JSON or has the wrong shape.
    #[error("Invalid curriculum: {message}\n\nSuggestion: The curriculum must be a JSON object with a \"lessons\" array of lesson ids")]
    CurriculumParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The curriculum lists no lessons.
    #[error("The curriculum is empty\n\nSuggestion: List at least one lesson id in curriculum.json")]
    EmptyCurriculum,

    /// The curriculum names a lesson twice.
    #[error("Lesson '{id}' appears more than once in the curriculum\n\nSuggestion: Each lesson may be walked only once; remove the duplicate entry")]
    DuplicateLesson {
        /// Duplicated lesson id.
        id: String,
    },

    /// The curriculum names a lesson that is not registered.
    #[error("Unknown lesson '{id}' in the curriculum\n\nSuggestion: Register the lesson in the driver or fix the id in curriculum.json")]
    UnknownLesson {
        /// Unresolved lesson id.
        id: String,
    },

    /// A lesson's koan registration is invalid.
    #[error("Invalid lesson '{lesson}': {message}")]
    InvalidLesson {
        /// Lesson name.
        lesson: String,
        /// What is wrong with it.
        message: String,
    },

    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KoansError {
    /// Creates a new `ConfigParseError`.
    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new `ConfigValidationError`.
    #[must_use]
    pub fn config_validation(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::ConfigValidationError {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Creates a new `CurriculumParseError`.
    #[must_use]
    pub fn curriculum_parse(message: impl Into<String>) -> Self {
        Self::CurriculumParseError {
            message: message.into(),
        }
    }

    /// Creates a new `DuplicateLesson` error.
    #[must_use]
    pub fn duplicate_lesson(id: impl Into<String>) -> Self {
        Self::DuplicateLesson { id: id.into() }
    }

    /// Creates a new `UnknownLesson` error.
    #[must_use]
    pub fn unknown_lesson(id: impl Into<String>) -> Self {
        Self::UnknownLesson { id: id.into() }
    }

    /// Creates a new `InvalidLesson` error.
    #[must_use]
    pub fn invalid_lesson(lesson: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLesson {
            lesson: lesson.into(),
            message: message.into(),
        }
    }
}
