//! Writes a solved copy of the shipped lessons into `OUT_DIR`.
//!
//! Every blank takes the answer from the hint comment above it, the text
//! after the question mark: `// What is 1 + 1? 2` solves the next `__()?`
//! with `2`. `test_solved` compiles the copy and walks it.

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Long form first, it contains the short one.
const PLACEHOLDERS: [&str; 2] = ["___()?", "__()?"];

fn main() -> Result<(), Box<dyn Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let lessons = manifest_dir.join("../../crates/koans/src");
    println!("cargo:rerun-if-changed={}", lessons.display());

    let curriculum: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(lessons.join("curriculum.json"))?)?;
    let ids: Vec<&str> = curriculum["lessons"]
        .as_array()
        .ok_or("curriculum.json has no lessons array")?
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();

    let solved_dir = out_dir.join("solved");
    fs::create_dir_all(&solved_dir)?;

    let mut modules = String::new();
    let mut lookup = String::from(
        "/// Looks up a solved lesson by its curriculum id.\n\
         fn solved_lesson(id: &str) -> Option<koans_runtime::Lesson> {\n    match id {\n",
    );

    for id in &ids {
        let source = fs::read_to_string(lessons.join(format!("{id}.rs")))?;
        let target = solved_dir.join(format!("{id}.rs"));
        fs::write(&target, solve(&source, id)?)?;

        writeln!(modules, "#[path = {:?}]\nmod {id};", target.display().to_string())?;
        writeln!(lookup, "        {id:?} => Some({id}::lesson()),")?;
    }
    lookup.push_str("        _ => None,\n    }\n}\n");

    fs::write(out_dir.join("solved.rs"), modules + "\n" + &lookup)?;
    Ok(())
}

fn solve(source: &str, id: &str) -> Result<String, String> {
    let mut answer: Option<&str> = None;
    let mut solved = String::with_capacity(source.len());

    for (index, line) in source.split_inclusive('\n').enumerate() {
        if let Some(comment) = line.trim_start().strip_prefix("//") {
            if let Some((_, hint)) = comment.split_once("? ") {
                answer = Some(hint.trim_end());
            }
            solved.push_str(line);
            continue;
        }

        let blank = PLACEHOLDERS
            .iter()
            .find_map(|placeholder| line.find(placeholder).map(|at| (at, placeholder.len())));
        match blank {
            Some((at, len)) => {
                let answer = answer
                    .take()
                    .ok_or_else(|| format!("{id}.rs:{}: blank without a hint above it", index + 1))?;
                solved.push_str(&line[..at]);
                solved.push_str(answer);
                solved.push_str(&line[at + len..]);
            }
            None => solved.push_str(line),
        }
    }
    Ok(solved)
}
