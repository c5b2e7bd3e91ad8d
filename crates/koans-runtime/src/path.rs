//! The path to enlightenment: walks every koan in curriculum order.

use std::panic;

use koans_report::DEFAULT_BAR_WIDTH;

use crate::curriculum::Curriculum;
use crate::error::Result;
use crate::lesson::Lesson;
use crate::sensei::Sensei;

/// Walks lessons in order and stops at the first koan that does not pass.
#[derive(Debug, Clone)]
pub struct PathWalker {
    lessons: Vec<Lesson>,
    bar_width: usize,
    quiet_panics: bool,
}

impl PathWalker {
    /// Creates a walker over already instantiated lessons.
    #[must_use]
    pub const fn new(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            bar_width: DEFAULT_BAR_WIDTH,
            quiet_panics: false,
        }
    }

    /// Instantiates the curriculum's lessons through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Curriculum::instantiate`].
    pub fn from_curriculum<F>(curriculum: &Curriculum, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<Lesson>,
    {
        Ok(Self::new(curriculum.instantiate(lookup)?))
    }

    /// Sets the progress bar width handed to the [`Sensei`].
    #[must_use]
    pub const fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Silences the default panic message while koans run.
    ///
    /// The panic hook is process-wide, so only binaries should turn this on.
    #[must_use]
    pub const fn quiet_panics(mut self, quiet: bool) -> Self {
        self.quiet_panics = quiet;
        self
    }

    /// The lessons, in walking order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Sum of every lesson's koan count.
    #[must_use]
    pub fn total_tests(&self) -> usize {
        self.lessons.iter().map(Lesson::len).sum()
    }

    /// Walks the path and returns the sensei holding the results.
    pub fn walk(&self) -> Sensei {
        if self.quiet_panics {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(|_| {}));
            let sensei = self.walk_inner();
            panic::set_hook(previous);
            sensei
        } else {
            self.walk_inner()
        }
    }

    fn walk_inner(&self) -> Sensei {
        let mut sensei = Sensei::new().with_bar_width(self.bar_width);
        sensei.set_total_tests(self.total_tests());

        'lessons: for lesson in &self.lessons {
            tracing::info!(lesson = lesson.name(), koans = lesson.len(), "Entering lesson");

            for name in lesson.test_methods() {
                let outcome = lesson.meditate_on_single(name);
                sensei.observe(&outcome, name, lesson);
                if sensei.has_failure() {
                    break 'lessons;
                }
            }
        }

        sensei.finish();
        tracing::info!(
            attempted = sensei.attempted(),
            passed = sensei.passed(),
            "Walk finished"
        );
        sensei
    }
}
