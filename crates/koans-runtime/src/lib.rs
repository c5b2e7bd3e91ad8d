//! Koans runtime
//!
//! Lessons, the assertions koans are written with, and the walker that runs
//! them in curriculum order until the first one fails.
//!
//! Lesson files only need the [`prelude`].

pub mod assertions;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod lesson;
pub mod path;
pub mod placeholder;
pub mod sensei;

pub use config::{Config, CONFIG_FILE_NAME};
pub use curriculum::Curriculum;
pub use error::{KoanError, KoanResult, KoansError, OrUnexpected, Result};
pub use lesson::{KoanFn, Lesson, TestCase, TestOutcome, TEST_PREFIX};
pub use path::PathWalker;
pub use placeholder::PlaceholderKind;
pub use sensei::Sensei;

/// Everything a lesson file uses.
pub mod prelude {
    pub use crate::assertions::{
        assert_equal, assert_equal_msg, assert_not_equal, assert_not_equal_msg, assert_panics,
        assert_panics_msg, assert_throws, assert_throws_msg, assert_true, assert_true_msg,
    };
    pub use crate::error::{KoanError, KoanResult, OrUnexpected};
    pub use crate::lesson::{Lesson, TestOutcome};
    pub use crate::placeholder::{__, ___};
}
