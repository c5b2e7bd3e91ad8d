//! The shipped lessons with every blank filled in from its hint.
//!
//! `build.rs` writes the solved copy. Compiling it proves each hinted answer
//! has the right type, and walking it must reach the end of the path.

use koans_report::ReportStatus;
use koans_runtime::PathWalker;

mod koan {
    pub use koans_runtime::prelude::*;
}

include!(concat!(env!("OUT_DIR"), "/solved.rs"));

fn solved_path() -> PathWalker {
    let curriculum = koans::curriculum().expect("Shipped curriculum should parse");
    PathWalker::from_curriculum(&curriculum, solved_lesson).expect("Solved lessons should load")
}

#[test]
fn test_hinted_answers_complete_the_path() {
    let report = solved_path().walk().report();

    assert!(
        report.failure.is_none(),
        "hinted answer does not solve the koan: {:?}",
        report.failure
    );
    assert_eq!(report.status, ReportStatus::Completed);
    assert_eq!(report.passed, report.total);
    assert!(report.is_complete());
}

#[test]
fn test_solved_copy_keeps_every_koan() {
    let shipped = koans::path().expect("Shipped curriculum should load");
    assert_eq!(solved_path().total_tests(), shipped.total_tests());
}
