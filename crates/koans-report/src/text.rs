//! Console report for a walk along the koans path.
//!
//! [`TextGenerator`] renders a [`ProgressReport`] in one of two shapes:
//!
//! - a failure block naming the lesson file, the koan, the captured message,
//!   a progress bar and a percentage-banded encouragement
//! - a celebration banner when every koan passed
//!
//! # Example
//!
//! ```rust
//! use koans_report::{Failure, FailureKind, ProgressReport, ReportStatus, TextGenerator};
//!
//! let report = ProgressReport {
//!     total: 10,
//!     attempted: 3,
//!     passed: 2,
//!     status: ReportStatus::Unsolved,
//!     failure: Some(Failure {
//!         lesson: "AboutAsserts".to_string(),
//!         file: "src/about_asserts.rs".to_string(),
//!         koan: "test_truth".to_string(),
//!         message: "Replace __ with a value".to_string(),
//!         kind: FailureKind::Unsolved,
//!     }),
//!     ..Default::default()
//! };
//!
//! let text = TextGenerator::new(&report).with_bar_width(10).generate();
//! assert!(text.contains("src/about_asserts.rs"));
//! assert!(text.contains("[##--------] 2/10 (20%)"));
//! ```

use std::fmt::Write;

use crate::{Failure, ProgressReport};

/// Default width of the progress bar, in characters between the brackets.
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BANNER: &str = r"
   .-.    .-.    .-.    .-.    .-.    .-.    .-.
  (   )--(   )--(   )--(   )--(   )--(   )--(   )
   `-'    `-'    `-'    `-'    `-'    `-'    `-'
         Mountains are again merely mountains.
";

/// Renders a [`ProgressReport`] for the terminal.
pub struct TextGenerator<'a> {
    report: &'a ProgressReport,
    bar_width: usize,
}

impl<'a> TextGenerator<'a> {
    /// Creates a generator using [`DEFAULT_BAR_WIDTH`].
    #[must_use]
    pub const fn new(report: &'a ProgressReport) -> Self {
        Self {
            report,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Sets the progress bar width. Zero falls back to one character.
    #[must_use]
    pub const fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = if width == 0 { 1 } else { width };
        self
    }

    /// Generates the full report.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        match &self.report.failure {
            Some(failure) => self.write_failure(&mut output, failure),
            None => self.write_celebration(&mut output),
        }

        output
    }

    fn write_failure(&self, output: &mut String, failure: &Failure) {
        let _ = writeln!(output, "Thinking {}", failure.lesson);
        let _ = writeln!(output, "  {} has damaged your karma.", failure.koan);
        let _ = writeln!(output);

        let _ = writeln!(output, "The master says:");
        let _ = writeln!(output, "  You have not yet reached enlightenment.");
        let _ = writeln!(output, "  {}", self.report.encouragement());
        let _ = writeln!(output);

        let _ = writeln!(output, "The answers you seek...");
        for line in failure.message.lines() {
            let _ = writeln!(output, "  {line}");
        }
        let _ = writeln!(output);

        let _ = writeln!(output, "Please meditate on the following code:");
        let _ = writeln!(output, "  {}", failure.file);
        let _ = writeln!(output);

        self.write_progress(output);
    }

    fn write_celebration(&self, output: &mut String) {
        let _ = writeln!(output, "{}", BANNER.trim_start_matches('\n'));
        let _ = writeln!(
            output,
            "You have walked the whole path. {} koans, {} solved.",
            self.report.total, self.report.passed
        );
        let _ = writeln!(output);

        self.write_progress(output);
    }

    fn write_progress(&self, output: &mut String) {
        let _ = writeln!(
            output,
            "your path thus far {} {}/{} ({}%)",
            progress_bar(self.report.passed, self.report.total, self.bar_width),
            self.report.passed,
            self.report.total,
            self.report.percent()
        );
    }
}

/// Draws `[####----]` with `passed / total` of `width` filled.
///
/// An empty path draws a full bar.
#[must_use]
pub fn progress_bar(passed: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (passed.min(total) * width) / total
    };

    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{FailureKind, ReportStatus};

    fn unsolved_report() -> ProgressReport {
        ProgressReport {
            total: 8,
            attempted: 5,
            passed: 4,
            status: ReportStatus::Unsolved,
            failure: Some(Failure {
                lesson: "AboutStrings".to_string(),
                file: "crates/koans/src/about_strings.rs".to_string(),
                koan: "test_concatenation".to_string(),
                message: "You need to replace __ with a value\nand try again".to_string(),
                kind: FailureKind::Unsolved,
            }),
            started_at: None,
            finished_at: None,
        }
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0, 4, 8), "[--------]");
        assert_eq!(progress_bar(1, 4, 8), "[##------]");
        assert_eq!(progress_bar(4, 4, 8), "[########]");
    }

    #[test]
    fn test_progress_bar_rounds_down() {
        assert_eq!(progress_bar(1, 3, 10), "[###-------]");
    }

    #[test]
    fn test_progress_bar_empty_path_is_full() {
        assert_eq!(progress_bar(0, 0, 4), "[####]");
    }

    #[test]
    fn test_progress_bar_clamps_overflow() {
        assert_eq!(progress_bar(9, 4, 4), "[####]");
    }

    #[test]
    fn test_failure_report_names_file_and_koan() {
        let report = unsolved_report();
        let text = TextGenerator::new(&report).generate();

        assert!(text.starts_with("Thinking AboutStrings\n"));
        assert!(text.contains("test_concatenation has damaged your karma."));
        assert!(text.contains("  crates/koans/src/about_strings.rs\n"));
    }

    #[test]
    fn test_failure_report_indents_every_message_line() {
        let report = unsolved_report();
        let text = TextGenerator::new(&report).generate();

        assert!(text.contains("  You need to replace __ with a value\n  and try again\n"));
    }

    #[test]
    fn test_failure_report_has_banded_encouragement() {
        let report = unsolved_report();
        let text = TextGenerator::new(&report).generate();

        // 4/8 is exactly half
        assert!(text.contains("You have walked half of the path or more."));
        assert!(text.contains("4/8 (50%)"));
    }

    #[test]
    fn test_celebration_report() {
        let report = ProgressReport {
            total: 3,
            attempted: 3,
            passed: 3,
            status: ReportStatus::Completed,
            ..Default::default()
        };
        let text = TextGenerator::new(&report).with_bar_width(6).generate();

        assert!(text.contains("Mountains are again merely mountains."));
        assert!(text.contains("3 koans, 3 solved"));
        assert!(text.contains("[######] 3/3 (100%)"));
        assert!(!text.contains("damaged your karma"));
    }

    #[test]
    fn test_zero_bar_width_falls_back() {
        let report = ProgressReport {
            total: 2,
            attempted: 2,
            passed: 2,
            status: ReportStatus::Completed,
            ..Default::default()
        };
        let text = TextGenerator::new(&report).with_bar_width(0).generate();
        assert!(text.contains("[#] 2/2 (100%)"));
    }

    #[test]
    fn test_failure_report_snapshot() {
        let report = unsolved_report();
        let text = TextGenerator::new(&report).with_bar_width(8).generate();

        insta::assert_snapshot!(text, @r"
        Thinking AboutStrings
          test_concatenation has damaged your karma.

        The master says:
          You have not yet reached enlightenment.
          You have walked half of the path or more. Do not lose heart.

        The answers you seek...
          You need to replace __ with a value
          and try again

        Please meditate on the following code:
          crates/koans/src/about_strings.rs

        your path thus far [####----] 4/8 (50%)
        ");
    }
}
