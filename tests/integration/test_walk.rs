//! End-to-end tests for walking the path.
//!
//! Small hand-built curricula check the stop-at-first-failure walk, and the
//! real curriculum from the `koans` crate checks that the shipped lessons
//! load and start out unsolved.

use std::sync::atomic::{AtomicUsize, Ordering};

use koans_report::{json::JsonGenerator, FailureKind, ReportStatus};
use koans_runtime::prelude::*;
use koans_runtime::{Curriculum, KoanFn, PathWalker};

static FIRST_LESSON_RUNS: AtomicUsize = AtomicUsize::new(0);
static SECOND_LESSON_LATE_RUNS: AtomicUsize = AtomicUsize::new(0);

fn counted_pass() -> KoanResult {
    FIRST_LESSON_RUNS.fetch_add(1, Ordering::SeqCst);
    assert_equal(4, 2 + 2)
}

fn unsolved() -> KoanResult {
    assert_equal(__()?, 2 + 2)
}

fn never_reached() -> KoanResult {
    SECOND_LESSON_LATE_RUNS.fetch_add(1, Ordering::SeqCst);
    Ok(())
}

fn pass() -> KoanResult {
    assert_true(true)
}

fn scenario_a(first_lesson: KoanFn) -> impl Fn(&str) -> Option<Lesson> {
    move |id| match id {
        "about_passing" => Some(
            Lesson::new("AboutPassing", "about_passing.rs")
                .koan("test_one", first_lesson)
                .koan("test_two", first_lesson)
                .koan("test_three", first_lesson),
        ),
        "about_blanks" => Some(
            Lesson::new("AboutBlanks", "about_blanks.rs")
                .koan("test_blank", unsolved)
                .koan("test_after_blank", never_reached)
                .koan("test_last", never_reached),
        ),
        _ => None,
    }
}

/// A passing lesson followed by a lesson whose first koan is blank: every
/// koan of the first lesson runs, the walk stops at the blank, and nothing
/// after it runs.
#[test]
fn test_scenario_a_stops_at_first_unsolved_koan() {
    let curriculum =
        Curriculum::new(["about_passing", "about_blanks"]).expect("Failed to build curriculum");
    let walker =
        PathWalker::from_curriculum(&curriculum, scenario_a(counted_pass))
            .expect("Failed to load lessons");

    let report = walker.walk().report();

    assert_eq!(FIRST_LESSON_RUNS.load(Ordering::SeqCst), 3);
    assert_eq!(SECOND_LESSON_LATE_RUNS.load(Ordering::SeqCst), 0);

    assert_eq!(report.total, 6);
    assert_eq!(report.attempted, 4);
    assert_eq!(report.passed, 3);
    assert_eq!(report.status, ReportStatus::Unsolved);

    let failure = report.failure.expect("A failure should be recorded");
    assert_eq!(failure.lesson, "AboutBlanks");
    assert_eq!(failure.file, "about_blanks.rs");
    assert_eq!(failure.koan, "test_blank");
    assert_eq!(failure.kind, FailureKind::Unsolved);
}

/// The failure block names the lesson file, the message and the progress.
#[test]
fn test_scenario_a_failure_block() {
    let curriculum =
        Curriculum::new(["about_passing", "about_blanks"]).expect("Failed to build curriculum");
    let sensei = PathWalker::from_curriculum(&curriculum, scenario_a(pass))
        .expect("Failed to load lessons")
        .with_bar_width(12)
        .walk();

    let mut out = Vec::new();
    sensei.instruct(&mut out).expect("Failed to render report");
    let text = String::from_utf8(out).expect("Report is not UTF-8");

    assert!(text.contains("Thinking AboutBlanks"));
    assert!(text.contains("test_blank has damaged your karma."));
    assert!(text.contains("You need to replace __"));
    assert!(text.contains("about_blanks.rs"));
    assert!(text.contains("[######------] 3/6 (50%)"));
    assert!(!text.contains("Mountains are again merely mountains."));
}

/// Every koan passes: success banner and a full count.
#[test]
fn test_scenario_b_all_pass() {
    let walker = PathWalker::new(vec![
        Lesson::new("AboutFirst", "first.rs")
            .koan("test_a", pass)
            .koan("test_b", pass),
        Lesson::new("AboutSecond", "second.rs").koan("test_c", pass),
    ]);

    let sensei = walker.walk();
    let report = sensei.report();

    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 3);
    assert_eq!(report.attempted, 3);
    assert!(report.failure.is_none());
    assert!(report.is_complete());
    assert_eq!(report.status, ReportStatus::Completed);

    let mut out = Vec::new();
    sensei.instruct(&mut out).expect("Failed to render report");
    let text = String::from_utf8(out).expect("Report is not UTF-8");
    assert!(text.contains("Mountains are again merely mountains."));
    assert!(text.contains("3/3 (100%)"));
}

/// The JSON report carries the same numbers as the console report.
#[test]
fn test_walk_json_report() {
    let walker = PathWalker::new(vec![Lesson::new("AboutFirst", "first.rs")
        .koan("test_a", pass)
        .koan("test_b", unsolved)]);
    let report = walker.walk().report();

    let json = JsonGenerator::new(&report)
        .generate()
        .expect("Failed to serialize report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(value["total"], 2);
    assert_eq!(value["passed"], 1);
    assert_eq!(value["failure"]["koan"], "test_b");
}

/// The shipped curriculum loads and its first koan is waiting for the student.
#[test]
fn test_shipped_curriculum_starts_unsolved() {
    let walker = koans::path().expect("Shipped curriculum should load");
    assert!(walker.total_tests() > 50);

    let report = walker.walk().report();
    assert_eq!(report.status, ReportStatus::Unsolved);
    assert_eq!(report.attempted, 1);

    let failure = report.failure.expect("First koan should be unsolved");
    assert_eq!(failure.lesson, "AboutAsserts");
    assert!(failure.file.ends_with("about_asserts.rs"));
}

/// Every lesson lists its koans in registration order, all `test_` prefixed.
#[test]
fn test_shipped_lessons_list_koans_in_order() {
    let lessons = koans::curriculum()
        .expect("Shipped curriculum should parse")
        .instantiate(koans::lesson)
        .expect("Shipped lessons should load");

    for lesson in &lessons {
        let methods = lesson.test_methods();
        assert_eq!(methods, lesson.test_methods());
        assert_eq!(
            methods.iter().filter(|m| m.starts_with("test_")).count(),
            lesson.len()
        );
    }
}
