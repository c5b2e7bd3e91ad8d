//! Koans progress reporting
//!
//! This crate holds the data produced by a walk along the koans path and the
//! renderers that turn it into something a student reads.
//!
//! # Types
//!
//! - [`ProgressReport`] - Totals, status and the first failure of a walk
//! - [`Failure`] - The koan that stopped the walk
//! - [`Encouragement`] - Percentage-banded words from the master
//!
//! # Generators
//!
//! - [`TextGenerator`] - The console report printed after every walk
//! - [`json::JsonGenerator`] - Machine-readable JSON report
//!
//! # Example
//!
//! ```rust
//! use koans_report::{ProgressReport, ReportStatus, TextGenerator};
//!
//! let report = ProgressReport {
//!     total: 4,
//!     attempted: 4,
//!     passed: 4,
//!     status: ReportStatus::Completed,
//!     ..Default::default()
//! };
//!
//! let text = TextGenerator::new(&report).generate();
//! assert!(text.contains("4/4"));
//! ```

pub mod json;
mod text;

pub use text::{progress_bar, TextGenerator, DEFAULT_BAR_WIDTH};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to serialize the report to JSON.
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to write the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

// ============================================================================
// Report Status
// ============================================================================

/// Where a walk along the path ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// No koan has been observed yet.
    #[default]
    NotStarted,
    /// Every koan passed.
    Completed,
    /// A koan still contains a placeholder.
    Unsolved,
    /// A koan failed an assertion or raised an unexpected error.
    Failed,
}

impl ReportStatus {
    /// Returns `true` if the whole path was walked.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns a human-readable description of the status.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NotStarted => "The path has not been walked",
            Self::Completed => "Enlightenment reached",
            Self::Unsolved => "A koan awaits your answer",
            Self::Failed => "A koan has damaged your karma",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Failure
// ============================================================================

/// Category of the failure that stopped the walk.
///
/// Local mirror of the runtime's error taxonomy so this crate stays free of
/// a dependency on the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An assertion did not hold.
    Assertion,
    /// A placeholder was reached.
    Unsolved,
    /// The koan panicked or raised a foreign error.
    Unexpected,
    /// The walker asked for a koan the lesson does not register.
    UnknownKoan,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assertion => write!(f, "assertion"),
            Self::Unsolved => write!(f, "unsolved"),
            Self::Unexpected => write!(f, "unexpected"),
            Self::UnknownKoan => write!(f, "unknown_koan"),
        }
    }
}

/// The first koan that did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Display name of the lesson (e.g. "AboutTypes").
    pub lesson: String,

    /// Source file of the lesson, as the student should open it.
    pub file: String,

    /// Name of the koan (e.g. "test_integers").
    pub koan: String,

    /// Human-readable failure message.
    pub message: String,

    /// Failure category.
    pub kind: FailureKind,
}

// ============================================================================
// ProgressReport
// ============================================================================

/// Snapshot of a walk along the koans path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Number of koans in the curriculum.
    pub total: usize,

    /// Number of koans that were run.
    pub attempted: usize,

    /// Number of koans that passed.
    pub passed: usize,

    /// Where the walk ended.
    pub status: ReportStatus,

    /// The first failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,

    /// When the walk started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the walk finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl ProgressReport {
    /// Percentage of koans passed, rounded down. An empty path counts as 100%.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.passed * 100 / self.total
    }

    /// Returns `true` if every koan passed and none failed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none() && self.passed == self.total
    }

    /// Wall-clock duration of the walk in milliseconds, when both ends are known.
    #[must_use]
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds()),
            _ => None,
        }
    }

    /// The encouragement band for this report's progress.
    #[must_use]
    pub const fn encouragement(&self) -> Encouragement {
        Encouragement::for_percent(self.percent())
    }
}

// ============================================================================
// Encouragement
// ============================================================================

/// Percentage-banded motivational line shown under a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encouragement {
    /// Less than a quarter of the path walked.
    Beginning,
    /// At least a quarter.
    Progressing,
    /// At least half.
    Halfway,
    /// At least three quarters.
    NearlyThere,
}

/// Lower bound (inclusive) of each band, highest first.
const ENCOURAGEMENT_BANDS: &[(usize, Encouragement)] = &[
    (75, Encouragement::NearlyThere),
    (50, Encouragement::Halfway),
    (25, Encouragement::Progressing),
    (0, Encouragement::Beginning),
];

impl Encouragement {
    /// Picks the band for a percentage.
    #[must_use]
    pub const fn for_percent(percent: usize) -> Self {
        let mut i = 0;
        while i < ENCOURAGEMENT_BANDS.len() {
            if percent >= ENCOURAGEMENT_BANDS[i].0 {
                return ENCOURAGEMENT_BANDS[i].1;
            }
            i += 1;
        }
        Self::Beginning
    }

    /// The line the master speaks for this band.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Beginning => "You have taken your first steps on the path. Keep meditating.",
            Self::Progressing => "The path grows clearer with every koan you solve.",
            Self::Halfway => "You have walked half of the path or more. Do not lose heart.",
            Self::NearlyThere => "Enlightenment is within reach. Do not stop now.",
        }
    }
}

impl std::fmt::Display for Encouragement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

// ============================================================================
// Tests
// ============================================================================
