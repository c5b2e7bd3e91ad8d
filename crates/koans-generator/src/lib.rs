//! Koan generator
//!
//! Turns the solution copy of the koans into the student copy: lesson files
//! lose their answer hints, the framework file is copied untouched, and a
//! small project scaffold is written alongside. The scaffold includes a
//! Cargo manifest and a walker binary, so `cargo run` inside the output
//! directory walks the student's own lessons.
//!
//! # Example
//!
//! ```no_run
//! use koans_generator::{FileTable, KoanGenerator};
//! use koans_runtime::{Config, Curriculum};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let curriculum = Curriculum::new(["about_asserts"])?;
//! let generator = KoanGenerator::new(&Config::default(), FileTable::from_curriculum(&curriculum))?;
//! let summary = generator.generate()?;
//! println!("{} files written", summary.written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod redact;
pub mod scaffold;
pub mod table;

pub use error::{GeneratorError, Result};
pub use generator::{FlaggedQuestion, GenerateSummary, KoanGenerator};
pub use redact::{RedactionRule, Redactor, UnredactedQuestion, FILL_IN_THE_BLANK, REDACTION_RULES};
pub use scaffold::{
    CargoManifest, CompilerConfig, Manifest, StrictFlags, BINARY_FILE, CARGO_MANIFEST_FILE,
    STUDENT_MAIN,
};
pub use table::{FileKind, FileMapping, FileTable, CURRICULUM_FILE, DRIVER_FILE, FRAMEWORK_FILE};
