//! Builds the student copy of the koans.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use koans_runtime::Config;

use crate::error::{GeneratorError, Result};
use crate::redact::Redactor;
use crate::scaffold::{
    self, CargoManifest, CompilerConfig, Manifest, BINARY_FILE, CARGO_MANIFEST_FILE, STUDENT_MAIN,
};
use crate::table::FileTable;

/// A question comment left in a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedQuestion {
    /// The generated file.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The comment text.
    pub comment: String,
}

/// What one `generate()` run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Files written after redaction, scaffold files included.
    pub written: Vec<PathBuf>,
    /// Files copied byte for byte.
    pub copied: Vec<PathBuf>,
    /// Sources that did not exist.
    pub skipped: Vec<PathBuf>,
    /// Question comments no redaction rule matched.
    pub unredacted: Vec<FlaggedQuestion>,
}

/// Produces the student copy from the solution copy.
#[derive(Debug, Clone)]
pub struct KoanGenerator {
    source_dir: PathBuf,
    output_dir: PathBuf,
    runtime_dir: PathBuf,
    compiler_config_file: String,
    manifest_file: String,
    table: FileTable,
    redactor: Redactor,
    compiler_config: CompilerConfig,
    manifest: Manifest,
}

impl KoanGenerator {
    /// Creates a generator for `table`, reading directories and scaffold file
    /// names from `config`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::FileCollision` if two generated files share a
    /// destination, and `GeneratorError::Pattern` if a redaction rule does not
    /// compile.
    pub fn new(config: &Config, table: FileTable) -> Result<Self> {
        check_destinations(config, &table)?;

        Ok(Self {
            source_dir: config.source_path(),
            output_dir: config.output_path(),
            runtime_dir: config.runtime_path(),
            compiler_config_file: config.compiler_config_file.clone(),
            manifest_file: config.manifest_file.clone(),
            table,
            redactor: Redactor::new()?,
            compiler_config: CompilerConfig::default(),
            manifest: Manifest::default(),
        })
    }

    /// The directory the student copy is written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every table entry and the scaffold into the output directory.
    ///
    /// A missing source is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::UnsafeOutputDir` if the output directory
    /// contains the sources, and `GeneratorError::Io` if a file cannot be read
    /// or written.
    pub fn generate(&self) -> Result<GenerateSummary> {
        self.check_output_dir()?;
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| GeneratorError::io(&self.output_dir, e))?;

        tracing::info!(
            source = %self.source_dir.display(),
            output = %self.output_dir.display(),
            files = self.table.len(),
            "Generating student copy"
        );

        let mut summary = GenerateSummary::default();

        for entry in self.table.entries() {
            let source = self.source_dir.join(&entry.source);
            let destination = self.output_dir.join(&entry.destination);

            let bytes = match fs::read(&source) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::warn!(name = %entry.name, path = %source.display(), "Source file missing, skipping");
                    summary.skipped.push(source);
                    continue;
                }
                Err(e) => return Err(GeneratorError::io(&source, e)),
            };

            let contents = if entry.kind.is_redacted() {
                let text = String::from_utf8(bytes).map_err(|e| {
                    GeneratorError::io(&source, io::Error::new(io::ErrorKind::InvalidData, e))
                })?;
                let redacted = self.redactor.redact(&text);

                for question in self.redactor.audit(&redacted) {
                    tracing::warn!(
                        file = %destination.display(),
                        line = question.line,
                        comment = %question.comment,
                        "Question comment left unredacted"
                    );
                    summary.unredacted.push(FlaggedQuestion {
                        file: destination.clone(),
                        line: question.line,
                        comment: question.comment,
                    });
                }
                redacted.into_bytes()
            } else {
                bytes
            };

            write_file(&destination, &contents)?;
            tracing::debug!(name = %entry.name, path = %destination.display(), "Wrote file");

            if entry.kind.is_redacted() {
                summary.written.push(destination);
            } else {
                summary.copied.push(destination);
            }
        }

        let compiler_config_path = self.output_dir.join(&self.compiler_config_file);
        let rendered = scaffold::render(&self.compiler_config_file, &self.compiler_config)?;
        write_file(&compiler_config_path, rendered.as_bytes())?;
        summary.written.push(compiler_config_path);

        let manifest_path = self.output_dir.join(&self.manifest_file);
        let rendered = scaffold::render(&self.manifest_file, &self.manifest)?;
        write_file(&manifest_path, rendered.as_bytes())?;
        summary.written.push(manifest_path);

        let runtime_dir = absolute(&self.runtime_dir)?;
        if !runtime_dir.join(CARGO_MANIFEST_FILE).exists() {
            tracing::warn!(path = %runtime_dir.display(), "No koans-runtime crate found, the student copy will not build");
        }
        let cargo = CargoManifest::derive(
            &self.compiler_config,
            &self.manifest,
            &runtime_dir.to_string_lossy(),
        );
        let cargo_path = self.output_dir.join(CARGO_MANIFEST_FILE);
        write_file(&cargo_path, scaffold::render_cargo(&cargo)?.as_bytes())?;
        summary.written.push(cargo_path);

        let main_path = self.output_dir.join(BINARY_FILE);
        write_file(&main_path, STUDENT_MAIN.as_bytes())?;
        summary.written.push(main_path);

        tracing::info!(
            written = summary.written.len(),
            copied = summary.copied.len(),
            skipped = summary.skipped.len(),
            "Generation finished"
        );
        Ok(summary)
    }

    /// Removes the output directory. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::UnsafeOutputDir` if the output directory
    /// contains the sources, and `GeneratorError::Io` if removal fails.
    pub fn clean(&self) -> Result<bool> {
        self.check_output_dir()?;

        if !self.output_dir.exists() {
            tracing::debug!(path = %self.output_dir.display(), "Nothing to clean");
            return Ok(false);
        }

        fs::remove_dir_all(&self.output_dir)
            .map_err(|e| GeneratorError::io(&self.output_dir, e))?;
        tracing::info!(path = %self.output_dir.display(), "Removed student copy");
        Ok(true)
    }

    fn check_output_dir(&self) -> Result<()> {
        let source = absolute(&self.source_dir)?;
        let output = absolute(&self.output_dir)?;

        if source.starts_with(&output) {
            return Err(GeneratorError::unsafe_output_dir(
                &self.output_dir,
                &self.source_dir,
            ));
        }
        Ok(())
    }
}

/// Every table destination and scaffold file must get a path of its own.
fn check_destinations(config: &Config, table: &FileTable) -> Result<()> {
    let scaffold = [
        (PathBuf::from(&config.compiler_config_file), "compilerConfigFile"),
        (PathBuf::from(&config.manifest_file), "manifestFile"),
        (PathBuf::from(CARGO_MANIFEST_FILE), "the Cargo manifest"),
        (PathBuf::from(BINARY_FILE), "the walker binary"),
    ]
    .into_iter()
    .map(|(path, owner)| (path, owner.to_string()));
    let entries = table
        .entries()
        .iter()
        .map(|entry| (entry.destination.clone(), format!("table entry '{}'", entry.name)));

    let mut claimed: BTreeMap<PathBuf, String> = BTreeMap::new();
    for (path, owner) in entries.chain(scaffold) {
        match claimed.entry(path) {
            Entry::Occupied(first) => {
                return Err(GeneratorError::file_collision(
                    first.key().clone(),
                    first.get().clone(),
                    owner,
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(owner);
            }
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| GeneratorError::io(path, e))
}

/// Absolute, lexically normalised form of `path`. Does not touch the
/// filesystem beyond reading the working directory.
fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| GeneratorError::io(".", e))?
            .join(path)
    };

    let mut normalised = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalised.pop();
            }
            other => normalised.push(other),
        }
    }
    Ok(normalised)
}
