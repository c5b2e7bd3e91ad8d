//! Configuration for the koans harness.
//!
//! Read from `koans.json` in the working directory. Every field is optional;
//! a missing file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KoansError, Result};

/// The default config file name.
pub const CONFIG_FILE_NAME: &str = "koans.json";

/// Default directory holding the solution copy of the koans.
fn default_source_dir() -> String {
    "crates/koans/src".to_string()
}

/// Default directory the student copy is generated into.
fn default_output_dir() -> String {
    "student".to_string()
}

/// Default location of this crate, which the student copy depends on.
fn default_runtime_dir() -> String {
    "crates/koans-runtime".to_string()
}

fn default_compiler_config_file() -> String {
    "koans.config.json".to_string()
}

fn default_manifest_file() -> String {
    "koans.manifest.json".to_string()
}

/// Default progress bar width in characters.
const fn default_progress_bar_width() -> usize {
    40
}

/// Harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing the solution lessons.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Directory the student copy is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory of the `koans-runtime` crate, referenced by the student
    /// copy's Cargo manifest.
    #[serde(default = "default_runtime_dir")]
    pub runtime_dir: String,

    /// File name of the compiler configuration scaffold.
    #[serde(default = "default_compiler_config_file")]
    pub compiler_config_file: String,

    /// File name of the project manifest scaffold.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Width of the progress bar in the walk report.
    #[serde(default = "default_progress_bar_width")]
    pub progress_bar_width: usize,

    /// Where to write the JSON progress report, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            runtime_dir: default_runtime_dir(),
            compiler_config_file: default_compiler_config_file(),
            manifest_file: default_manifest_file(),
            progress_bar_width: default_progress_bar_width(),
            report_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            KoansError::config_parse(
                "<current directory>",
                format!("cannot determine current directory: {e}"),
            )
        })?;
        Self::load_from_dir(&current_dir)
    }

    /// Loads `koans.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load_from_file`].
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_from_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from a specific file path.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `KoansError::ConfigParseError` if the file cannot be read or
    /// holds invalid JSON, and `KoansError::ConfigValidationError` if a value
    /// is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
            Err(e) => {
                return Err(KoansError::config_parse(
                    path,
                    format!("failed to read file: {e}"),
                ));
            }
        };

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| KoansError::config_parse(path, e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `KoansError::ConfigValidationError` for the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.trim().is_empty() {
            return Err(KoansError::config_validation(
                "sourceDir must not be empty",
                "Point sourceDir at the directory holding the lesson files in your koans.json",
            ));
        }

        if self.output_dir.trim().is_empty() {
            return Err(KoansError::config_validation(
                "outputDir must not be empty",
                "Provide an output directory for the student copy in your koans.json",
            ));
        }

        if self.runtime_dir.trim().is_empty() {
            return Err(KoansError::config_validation(
                "runtimeDir must not be empty",
                "Point runtimeDir at the koans-runtime crate in your koans.json",
            ));
        }

        if Path::new(&self.source_dir) == Path::new(&self.output_dir) {
            return Err(KoansError::config_validation(
                "sourceDir and outputDir must differ",
                "Generating into the source directory would overwrite the solutions; pick another outputDir",
            ));
        }

        if self.progress_bar_width == 0 {
            return Err(KoansError::config_validation(
                "progressBarWidth must be greater than 0",
                "Set progressBarWidth to at least 1 in your koans.json",
            ));
        }

        for (field, name) in [
            ("compilerConfigFile", &self.compiler_config_file),
            ("manifestFile", &self.manifest_file),
        ] {
            if name.trim().is_empty() {
                return Err(KoansError::config_validation(
                    format!("{field} must not be empty"),
                    format!("Provide a file name for {field} in your koans.json"),
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(KoansError::config_validation(
                    format!("{field} must be a plain file name, got '{name}'"),
                    "Scaffold files are always written to the output directory; drop the directory part",
                ));
            }
        }

        if matches!(&self.report_file, Some(path) if path.trim().is_empty()) {
            return Err(KoansError::config_validation(
                "reportFile must not be empty",
                "Remove reportFile or give it a path in your koans.json",
            ));
        }

        Ok(())
    }

    /// Source directory as a path.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(&self.source_dir)
    }

    /// Output directory as a path.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Runtime crate directory as a path.
    #[must_use]
    pub fn runtime_path(&self) -> PathBuf {
        PathBuf::from(&self.runtime_dir)
    }
}
