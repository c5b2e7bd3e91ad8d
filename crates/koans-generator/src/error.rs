//! Error types for the koan generator.

use std::path::PathBuf;

/// A specialized `Result` type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that stop generation.
///
/// A missing source file is not among them: it is logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The output directory would swallow the source directory.
    #[error("Refusing to use '{output}' as output directory: it contains the lesson sources in '{source_dir}'\n\nSuggestion: Set outputDir in koans.json to a directory outside sourceDir")]
    UnsafeOutputDir {
        /// The configured output directory.
        output: PathBuf,
        /// The configured source directory.
        source_dir: PathBuf,
    },

    /// A redaction pattern does not compile.
    #[error("Invalid redaction pattern for '{label}': {source}")]
    Pattern {
        /// The rule label.
        label: String,
        /// The regex error.
        #[source]
        source: regex::Error,
    },

    /// A scaffold file could not be serialized.
    #[error("Failed to serialize scaffold '{name}': {source}")]
    Scaffold {
        /// The scaffold file name.
        name: String,
        /// The serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The Cargo manifest of the student copy could not be serialized.
    #[error("Failed to serialize Cargo.toml: {source}")]
    CargoManifest {
        /// The serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Two generated files would land on the same path.
    #[error("Both {first} and {second} would be written to '{path}'\n\nSuggestion: Rename compilerConfigFile or manifestFile in koans.json")]
    FileCollision {
        /// The shared destination, relative to the output directory.
        path: PathBuf,
        /// What the first file is.
        first: String,
        /// What the second file is.
        second: String,
    },
}

impl GeneratorError {
    /// Creates an `Io` error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an `UnsafeOutputDir` error.
    #[must_use]
    pub fn unsafe_output_dir(output: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self::UnsafeOutputDir {
            output: output.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Creates a `Pattern` error.
    #[must_use]
    pub fn pattern(label: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            label: label.into(),
            source,
        }
    }

    /// Creates a `Scaffold` error.
    #[must_use]
    pub fn scaffold(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Scaffold {
            name: name.into(),
            source,
        }
    }

    /// Creates a `CargoManifest` error.
    #[must_use]
    pub const fn cargo_manifest(source: toml::ser::Error) -> Self {
        Self::CargoManifest { source }
    }

    /// Creates a `FileCollision` error.
    #[must_use]
    pub fn file_collision(
        path: impl Into<PathBuf>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::FileCollision {
            path: path.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_output_dir_display() {
        let err = GeneratorError::unsafe_output_dir("crates", "crates/koans/src");
        let msg = err.to_string();
        assert!(msg.contains("'crates'"));
        assert!(msg.contains("Suggestion"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = GeneratorError::io(
            "student/about_types.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("student/about_types.rs"));
    }

    #[test]
    fn test_file_collision_names_both_files() {
        let err = GeneratorError::file_collision("lib.rs", "compilerConfigFile", "table entry 'driver'");
        let msg = err.to_string();
        assert!(msg.contains("'lib.rs'"));
        assert!(msg.contains("compilerConfigFile"));
        assert!(msg.contains("driver"));
    }
}
