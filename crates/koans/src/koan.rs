//! Everything a lesson needs, in one import.

pub use koans_runtime::prelude::*;
