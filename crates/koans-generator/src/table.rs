//! The file mapping table.

use std::path::PathBuf;

use koans_runtime::Curriculum;

/// File holding the lesson framework re-exports.
pub const FRAMEWORK_FILE: &str = "koan.rs";

/// File holding the driver that registers every lesson.
pub const DRIVER_FILE: &str = "lib.rs";

/// The curriculum artifact.
pub const CURRICULUM_FILE: &str = "curriculum.json";

/// How an entry is carried into the student copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A lesson; question comments are redacted.
    Lesson,
    /// Framework code, copied byte for byte.
    Framework,
    /// The driver; redacted like a lesson.
    Driver,
    /// The curriculum artifact, copied byte for byte.
    Curriculum,
}

impl FileKind {
    /// Returns `true` when the file goes through the redaction transform.
    #[must_use]
    pub const fn is_redacted(self) -> bool {
        matches!(self, Self::Lesson | Self::Driver)
    }
}

/// One `source -> destination` pair. Both paths are relative to the source
/// and output directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMapping {
    /// Short name used in log lines.
    pub name: String,
    /// Path relative to the source directory.
    pub source: PathBuf,
    /// Path relative to the output directory.
    pub destination: PathBuf,
    /// How the file is carried over.
    pub kind: FileKind,
}

impl FileMapping {
    /// Maps a file to the same relative path in the output directory.
    #[must_use]
    pub fn mirrored(name: impl Into<String>, file: impl Into<PathBuf>, kind: FileKind) -> Self {
        let file = file.into();
        Self {
            name: name.into(),
            source: file.clone(),
            destination: file,
            kind,
        }
    }
}

/// The fixed set of files the generator processes, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTable {
    entries: Vec<FileMapping>,
}

impl FileTable {
    /// Builds a table from explicit entries.
    #[must_use]
    pub const fn new(entries: Vec<FileMapping>) -> Self {
        Self { entries }
    }

    /// One lesson file per curriculum id, then the framework file, the driver
    /// and the curriculum artifact.
    #[must_use]
    pub fn from_curriculum(curriculum: &Curriculum) -> Self {
        let mut entries: Vec<FileMapping> = curriculum
            .ids()
            .map(|id| FileMapping::mirrored(id, format!("{id}.rs"), FileKind::Lesson))
            .collect();

        entries.push(FileMapping::mirrored("koan", FRAMEWORK_FILE, FileKind::Framework));
        entries.push(FileMapping::mirrored("driver", DRIVER_FILE, FileKind::Driver));
        entries.push(FileMapping::mirrored(
            "curriculum",
            CURRICULUM_FILE,
            FileKind::Curriculum,
        ));

        Self { entries }
    }

    /// The entries, in processing order.
    #[must_use]
    pub fn entries(&self) -> &[FileMapping] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
