//! The project scaffold written next to the student's lessons.
//!
//! Two JSON files describe the project: [`CompilerConfig`] and [`Manifest`].
//! The Cargo manifest is derived from both, and together with the walker
//! binary in [`STUDENT_MAIN`] it makes the output directory a crate that
//! `cargo run` walks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// The Cargo manifest of the student copy.
pub const CARGO_MANIFEST_FILE: &str = "Cargo.toml";

/// The binary that walks the student copy.
pub const BINARY_FILE: &str = "main.rs";

/// Library name of the student copy; lessons reach the framework through it.
pub const STUDENT_LIB_NAME: &str = "koans";

/// Source of [`BINARY_FILE`].
pub const STUDENT_MAIN: &str = r#"//! Walks the path of koans.

use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let walker = match koans::path() {
        Ok(walker) => walker.quiet_panics(true),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    let sensei = walker.walk();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = sensei.instruct(&mut stdout).and_then(|()| stdout.flush()) {
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    if sensei.report().is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
"#;

/// Compiler and project settings for the student copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// Rust edition the lessons are written for.
    pub edition: String,
    /// How lesson files are organised.
    pub module_system: String,
    /// Strictness switches.
    pub strict: StrictFlags,
    /// Build output directory.
    pub out_dir: String,
    /// Files that belong to the project.
    pub include: Vec<String>,
    /// Files that do not.
    pub exclude: Vec<String>,
}

/// Strictness switches of [`CompilerConfig`], carried into the `[lints]`
/// table of the Cargo manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrictFlags {
    /// Forbid `unsafe` blocks.
    pub forbid_unsafe: bool,
    /// Make an ignored `Result` an error.
    pub unused_must_use: bool,
    /// Warn on numeric casts that may truncate.
    pub lossy_casts: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            edition: "2021".to_string(),
            module_system: "crate".to_string(),
            strict: StrictFlags {
                forbid_unsafe: true,
                unused_must_use: true,
                lossy_casts: true,
            },
            out_dir: "target".to_string(),
            include: vec!["*.rs".to_string(), "curriculum.json".to_string()],
            exclude: vec!["target/**".to_string()],
        }
    }
}

/// Project manifest for the student copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Project name.
    pub name: String,
    /// Project version.
    pub version: String,
    /// Whether the project may be published.
    pub private: bool,
    /// Named commands.
    pub scripts: BTreeMap<String, String>,
    /// Tooling used while solving the koans.
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        let scripts = [
            ("build", "cargo build"),
            ("test", "cargo run --bin koans"),
            ("lint", "cargo clippy"),
        ];
        let dev_dependencies = [("clippy", "*"), ("rustfmt", "*")];

        Self {
            name: "koans-student".to_string(),
            version: "0.1.0".to_string(),
            private: true,
            scripts: scripts
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            dev_dependencies: dev_dependencies
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// `Cargo.toml` of the student copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoManifest {
    /// `[package]`
    pub package: CargoPackage,
    /// `[lib]`
    pub lib: CargoTarget,
    /// `[[bin]]`
    pub bin: Vec<CargoTarget>,
    /// `[dependencies]`
    pub dependencies: BTreeMap<String, PathDependency>,
    /// `[lints]`
    pub lints: CargoLints,
    /// `[workspace]`, so the copy builds on its own even when it sits inside
    /// another workspace.
    pub workspace: CargoWorkspace,
}

/// `[package]` of [`CargoManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoPackage {
    /// Package name.
    pub name: String,
    /// Package version.
    pub version: String,
    /// Rust edition.
    pub edition: String,
    /// Whether the package may be published.
    pub publish: bool,
}

/// A `[lib]` or `[[bin]]` target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoTarget {
    /// Target name.
    pub name: String,
    /// Root file, relative to the manifest.
    pub path: String,
}

/// A dependency on a local crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathDependency {
    /// Directory holding the crate.
    pub path: String,
}

/// `[lints]` of [`CargoManifest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoLints {
    /// `[lints.rust]`
    #[serde(default)]
    pub rust: BTreeMap<String, String>,
    /// `[lints.clippy]`
    #[serde(default)]
    pub clippy: BTreeMap<String, String>,
}

/// `[workspace]` of [`CargoManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoWorkspace {
    /// Feature resolver version.
    pub resolver: String,
}

impl CargoManifest {
    /// Derives the Cargo manifest from the two JSON scaffold files.
    ///
    /// `runtime_dir` is where the `koans-runtime` crate lives.
    #[must_use]
    pub fn derive(compiler: &CompilerConfig, manifest: &Manifest, runtime_dir: &str) -> Self {
        let mut lints = CargoLints::default();
        if compiler.strict.forbid_unsafe {
            lints.rust.insert("unsafe_code".to_string(), "forbid".to_string());
        }
        if compiler.strict.unused_must_use {
            lints.rust.insert("unused_must_use".to_string(), "deny".to_string());
        }
        if compiler.strict.lossy_casts {
            lints
                .clippy
                .insert("cast_possible_truncation".to_string(), "warn".to_string());
        }

        let mut dependencies = BTreeMap::new();
        dependencies.insert(
            "koans-runtime".to_string(),
            PathDependency {
                path: runtime_dir.to_string(),
            },
        );

        Self {
            package: CargoPackage {
                name: manifest.name.clone(),
                version: manifest.version.clone(),
                edition: compiler.edition.clone(),
                publish: !manifest.private,
            },
            lib: CargoTarget {
                name: STUDENT_LIB_NAME.to_string(),
                path: crate::table::DRIVER_FILE.to_string(),
            },
            bin: vec![CargoTarget {
                name: STUDENT_LIB_NAME.to_string(),
                path: BINARY_FILE.to_string(),
            }],
            dependencies,
            lints,
            workspace: CargoWorkspace {
                resolver: "2".to_string(),
            },
        }
    }
}

/// Pretty JSON with a trailing newline.
pub(crate) fn render<T: Serialize>(name: &str, value: &T) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| GeneratorError::scaffold(name, e))?;
    json.push('\n');
    Ok(json)
}

/// The Cargo manifest as TOML.
pub(crate) fn render_cargo(manifest: &CargoManifest) -> Result<String> {
    toml::to_string_pretty(manifest).map_err(GeneratorError::cargo_manifest)
}
