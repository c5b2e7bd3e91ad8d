//! The sensei keeps score while the student walks the path.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use koans_report::{
    Failure, FailureKind, ProgressReport, ReportStatus, TextGenerator, DEFAULT_BAR_WIDTH,
};

use crate::lesson::{Lesson, TestOutcome};

/// Accumulates koan outcomes and renders the final report.
///
/// The first failure observed is the one reported. Later observations still
/// count towards the totals but never replace it.
#[derive(Debug, Clone)]
pub struct Sensei {
    total: usize,
    attempted: usize,
    passed: usize,
    failure: Option<Failure>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    bar_width: usize,
}

impl Default for Sensei {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensei {
    /// Creates a sensei with no observations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            total: 0,
            attempted: 0,
            passed: 0,
            failure: None,
            started_at: Utc::now(),
            finished_at: None,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Sets the width of the progress bar drawn by [`Sensei::instruct`].
    #[must_use]
    pub const fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Records how many koans the curriculum holds.
    pub fn set_total_tests(&mut self, total: usize) {
        self.total = total;
    }

    /// Records the outcome of one koan.
    pub fn observe(&mut self, outcome: &TestOutcome, test_name: &str, lesson: &Lesson) {
        self.attempted += 1;

        let (Some(message), Some(kind)) = (outcome.message(), outcome.failure_kind()) else {
            self.passed += 1;
            return;
        };

        if self.failure.is_some() {
            tracing::debug!(lesson = lesson.name(), koan = test_name, "Failure already recorded");
            return;
        }

        tracing::info!(lesson = lesson.name(), koan = test_name, %kind, "Koan not yet solved");
        self.failure = Some(Failure {
            lesson: lesson.name().to_string(),
            file: lesson.file().to_string(),
            koan: test_name.to_string(),
            message,
            kind,
        });
    }

    /// Marks the walk as finished.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Returns `true` once a failure has been recorded.
    #[must_use]
    pub const fn has_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Number of koans observed.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of koans that passed.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Snapshot of the walk so far.
    #[must_use]
    pub fn report(&self) -> ProgressReport {
        let status = match &self.failure {
            Some(failure) if failure.kind == FailureKind::Unsolved => ReportStatus::Unsolved,
            Some(_) => ReportStatus::Failed,
            None if self.attempted == 0 && self.total > 0 => ReportStatus::NotStarted,
            None => ReportStatus::Completed,
        };

        ProgressReport {
            total: self.total,
            attempted: self.attempted,
            passed: self.passed,
            status,
            failure: self.failure.clone(),
            started_at: Some(self.started_at),
            finished_at: self.finished_at,
        }
    }

    /// Writes the report: the failure block, or the celebration when the path
    /// is complete.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn instruct(&self, out: &mut impl Write) -> io::Result<()> {
        let report = self.report();
        let text = TextGenerator::new(&report)
            .with_bar_width(self.bar_width)
            .generate();
        out.write_all(text.as_bytes())
    }
}
