//! Everything a lesson needs, in one import.
// What is this file? The framework, copied as is.

pub use koans_runtime::prelude::*;
