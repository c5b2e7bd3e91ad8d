//! End-to-end tests for generating the student copy.
//!
//! The sample lessons under `fixtures/sample-lessons` are read in place and
//! every test writes to its own directory under the system temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use koans_generator::{FileKind, FileMapping, FileTable, KoanGenerator};
use koans_runtime::{Config, Curriculum};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn sample_lessons() -> PathBuf {
    fixture_path().join("sample-lessons")
}

fn workspace_crate(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../crates")
        .join(name)
}

/// A fresh output directory, removed again when dropped.
struct Output(PathBuf);

impl Output {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "koans_it_{name}_{}",
            std::process::id()
        ));
        fs::remove_dir_all(&dir).ok();
        Self(dir)
    }

    fn file(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for Output {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.0).ok();
    }
}

fn config(source: &Path, output: &Output) -> Config {
    Config {
        source_dir: source.to_string_lossy().into_owned(),
        output_dir: output.0.to_string_lossy().into_owned(),
        ..Config::default()
    }
}

fn sample_generator(output: &Output) -> KoanGenerator {
    let json = fs::read_to_string(sample_lessons().join("curriculum.json"))
        .expect("Fixture curriculum should exist");
    let curriculum = Curriculum::from_json(&json).expect("Fixture curriculum should parse");

    KoanGenerator::new(
        &config(&sample_lessons(), output),
        FileTable::from_curriculum(&curriculum),
    )
    .expect("Generator should build")
}

/// The question comment above a blank becomes `// Fill in the blank` and the
/// blank itself is left byte for byte.
#[test]
fn test_scenario_c_redacts_question_keeps_placeholder() {
    let output = Output::new("scenario_c");
    sample_generator(&output)
        .generate()
        .expect("Generation should succeed");

    let source = fs::read_to_string(sample_lessons().join("about_sample.rs")).unwrap();
    let generated = fs::read_to_string(output.file("about_sample.rs")).unwrap();

    let source_lines: Vec<&str> = source.lines().collect();
    let generated_lines: Vec<&str> = generated.lines().collect();
    assert_eq!(source_lines.len(), generated_lines.len());

    let question = source_lines
        .iter()
        .position(|line| line.trim() == "// What is the result? 4")
        .expect("Fixture should hold the question");
    assert_eq!(generated_lines[question], "    // Fill in the blank");
    assert_eq!(generated_lines[question + 1], source_lines[question + 1]);
    assert_eq!(generated_lines[question + 1], "    assert_equal(__()?, 2 + 2)");

    assert!(!generated.contains("What is"));
    assert!(!generated.contains("How many"));
}

/// The framework file is copied untouched, question comment included.
#[test]
fn test_framework_copied_verbatim() {
    let output = Output::new("framework");
    let summary = sample_generator(&output)
        .generate()
        .expect("Generation should succeed");

    let source = fs::read(sample_lessons().join("koan.rs")).unwrap();
    let generated = fs::read(output.file("koan.rs")).unwrap();
    assert_eq!(source, generated);
    assert!(summary.copied.contains(&output.file("koan.rs")));
}

/// Table entries without a source are skipped, the rest still generates.
#[test]
fn test_missing_sources_are_skipped() {
    let output = Output::new("missing");
    let summary = sample_generator(&output)
        .generate()
        .expect("Missing sources are not fatal");

    let skipped: Vec<_> = summary
        .skipped
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert!(skipped.contains(&"about_missing.rs"));
    assert!(skipped.contains(&"lib.rs"));
    assert!(output.file("about_sample.rs").exists());
    assert!(output.file("curriculum.json").exists());
}

/// Both scaffold files are written and hold JSON.
#[test]
fn test_scaffold_written() {
    let output = Output::new("scaffold");
    sample_generator(&output)
        .generate()
        .expect("Generation should succeed");

    for name in ["koans.config.json", "koans.manifest.json"] {
        let text = fs::read_to_string(output.file(name))
            .unwrap_or_else(|e| panic!("{name} should exist: {e}"));
        let value: serde_json::Value = serde_json::from_str(&text).expect("Scaffold is JSON");
        assert!(value.is_object());
    }
}

/// `clean()` after `generate()` leaves no output directory behind.
#[test]
fn test_scenario_d_clean_removes_output() {
    let output = Output::new("scenario_d");
    let generator = sample_generator(&output);

    generator.generate().expect("Generation should succeed");
    assert!(output.0.exists());

    assert!(generator.clean().expect("Clean should succeed"));
    assert!(!output.0.exists());
}

/// A second `generate()` without `clean()` writes identical files.
#[test]
fn test_generate_is_idempotent() {
    let output = Output::new("idempotent");
    let generator = sample_generator(&output);

    generator.generate().expect("First generation should succeed");
    let first: Vec<_> = ["about_sample.rs", "koan.rs", "koans.config.json", "koans.manifest.json"]
        .iter()
        .map(|name| fs::read(output.file(name)).unwrap())
        .collect();

    generator.generate().expect("Second generation should succeed");
    let second: Vec<_> = ["about_sample.rs", "koan.rs", "koans.config.json", "koans.manifest.json"]
        .iter()
        .map(|name| fs::read(output.file(name)).unwrap())
        .collect();

    assert_eq!(first, second);
}

/// The shipped lessons generate without skips and every hint matches a rule.
#[test]
fn test_shipped_lessons_generate_cleanly() {
    let output = Output::new("shipped");
    let source = workspace_crate("koans").join("src");
    let curriculum = koans::curriculum().expect("Shipped curriculum should parse");

    let summary = KoanGenerator::new(
        &config(&source, &output),
        FileTable::from_curriculum(&curriculum),
    )
    .expect("Generator should build")
    .generate()
    .expect("Generation should succeed");

    assert!(summary.skipped.is_empty(), "skipped: {:?}", summary.skipped);
    assert!(
        summary.unredacted.is_empty(),
        "unredacted: {:?}",
        summary.unredacted
    );

    let driver = fs::read_to_string(output.file("lib.rs")).unwrap();
    assert!(driver.contains("pub fn lesson(id: &str)"));
    assert_eq!(
        fs::read(output.file("koan.rs")).unwrap(),
        fs::read(source.join("koan.rs")).unwrap()
    );
}

/// The student copy is a crate of its own: its manifest points at files that
/// exist, every module the driver declares was generated, and the runtime
/// dependency resolves.
#[test]
fn test_student_copy_is_a_crate() {
    let output = Output::new("crate_layout");
    let source = workspace_crate("koans").join("src");
    let curriculum = koans::curriculum().expect("Shipped curriculum should parse");
    let config = Config {
        runtime_dir: workspace_crate("koans-runtime")
            .to_string_lossy()
            .into_owned(),
        ..config(&source, &output)
    };

    KoanGenerator::new(&config, FileTable::from_curriculum(&curriculum))
        .expect("Generator should build")
        .generate()
        .expect("Generation should succeed");

    let manifest: toml::Table = fs::read_to_string(output.file("Cargo.toml"))
        .expect("Cargo.toml should be written")
        .parse()
        .expect("Cargo.toml should be TOML");

    assert_eq!(manifest["package"]["name"].as_str(), Some("koans-student"));
    assert!(manifest.contains_key("workspace"));

    let lib = manifest["lib"]["path"].as_str().expect("lib path");
    assert!(output.file(lib).exists());
    let bins = manifest["bin"].as_array().expect("bin targets");
    assert_eq!(bins.len(), 1);
    let main = bins[0]["path"].as_str().expect("bin path");
    assert!(fs::read_to_string(output.file(main))
        .expect("Walker binary should be written")
        .contains("koans::path()"));

    let runtime = manifest["dependencies"]["koans-runtime"]["path"]
        .as_str()
        .expect("runtime dependency path");
    assert!(Path::new(runtime).join("Cargo.toml").exists());

    let driver = fs::read_to_string(output.file(lib)).unwrap();
    for line in driver.lines() {
        let declared = line
            .trim()
            .strip_prefix("pub mod ")
            .or_else(|| line.trim().strip_prefix("mod "))
            .and_then(|rest| rest.strip_suffix(';'));
        if let Some(module) = declared {
            assert!(
                output.file(&format!("{module}.rs")).exists(),
                "{module}.rs is declared but not generated"
            );
        }
    }
    assert!(output.file("curriculum.json").exists());
}

/// The fixture configuration parses with its overrides applied.
#[test]
fn test_fixture_config_loads() {
    let config = Config::load_from_file(&fixture_path().join("koans.json"))
        .expect("Fixture config should load");

    assert_eq!(config.source_dir, "lessons");
    assert_eq!(config.progress_bar_width, 20);
    assert_eq!(config.report_file.as_deref(), Some("progress.json"));
    assert_eq!(config.compiler_config_file, "koans.config.json");
}

/// An explicit table works without a curriculum.
#[test]
fn test_explicit_table() {
    let output = Output::new("explicit");
    let table = FileTable::new(vec![FileMapping {
        name: "renamed".to_string(),
        source: PathBuf::from("about_sample.rs"),
        destination: PathBuf::from("lessons/about_renamed.rs"),
        kind: FileKind::Lesson,
    }]);

    KoanGenerator::new(&config(&sample_lessons(), &output), table)
        .expect("Generator should build")
        .generate()
        .expect("Generation should succeed");

    let generated = fs::read_to_string(output.file("lessons/about_renamed.rs")).unwrap();
    assert!(generated.contains("// Fill in the blank"));
}
