//! Koans CLI
//!
//! Walks the path of koans, or generates the student copy of them.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use koans_generator::{FileTable, GenerateSummary, KoanGenerator};
use koans_report::json::JsonGenerator;
use koans_runtime::Config;
use tracing_subscriber::EnvFilter;

/// Koans - learn Rust one failing test at a time
///
/// With no command, walks every koan in curriculum order and stops at the
/// first one that is not solved yet.
#[derive(Parser, Debug)]
#[command(name = "koans")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: koans.json in current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the koans built into this binary and report the first unsolved one
    Walk {
        /// Also write the progress report as JSON to this file
        #[arg(long, value_name = "FILE")]
        json: Option<String>,
    },

    /// Generate the student copy of the koans
    Generate {
        #[command(subcommand)]
        action: Option<GenerateAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum GenerateAction {
    /// Remove the generated student copy
    Clean,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::debug!(config = ?args.config, command = ?args.command, "Koans starting");

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        None => walk(&config, None),
        Some(Command::Walk { json }) => walk(&config, json.as_deref()),
        Some(Command::Generate { action: None }) => generate(&config),
        Some(Command::Generate {
            action: Some(GenerateAction::Clean),
        }) => clean(&config),
    }
}

/// Walks the curriculum and prints the sensei's report.
///
/// Exits with 0 when every koan passes and 1 otherwise.
fn walk(config: &Config, json: Option<&str>) -> anyhow::Result<ExitCode> {
    let walker = koans::path()
        .map_err(|e| anyhow::anyhow!("{e}"))?
        .with_bar_width(config.progress_bar_width)
        .quiet_panics(true);

    let sensei = walker.walk();

    let mut stdout = io::stdout().lock();
    sensei.instruct(&mut stdout)?;
    stdout.flush()?;

    let report = sensei.report();
    if let Some(path) = json.or(config.report_file.as_deref()) {
        JsonGenerator::new(&report)
            .write_to_file(Path::new(path), true)
            .map_err(|e| anyhow::anyhow!("Failed to write JSON report to '{path}': {e}"))?;
        tracing::info!(path, "JSON report written");
    }

    Ok(if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn generate(config: &Config) -> anyhow::Result<ExitCode> {
    let generator = build_generator(config)?;
    let summary = generator.generate()?;
    print_summary(generator.output_dir(), &summary);
    Ok(ExitCode::SUCCESS)
}

fn clean(config: &Config) -> anyhow::Result<ExitCode> {
    let generator = build_generator(config)?;
    if generator.clean()? {
        println!("Removed {}", generator.output_dir().display());
    } else {
        println!(
            "Nothing to clean: {} does not exist",
            generator.output_dir().display()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn build_generator(config: &Config) -> anyhow::Result<KoanGenerator> {
    let curriculum = koans::curriculum().map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(KoanGenerator::new(
        config,
        FileTable::from_curriculum(&curriculum),
    )?)
}

/// Loads configuration from the specified path or the current directory.
fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    match config_path {
        Some(path_str) => {
            let path = Path::new(path_str);
            if !path.exists() {
                anyhow::bail!(
                    "Config file not found: '{}'\n\nSuggestion: Check the path or remove the --config flag to use defaults",
                    path.display()
                );
            }
            Config::load_from_file(path).map_err(|e| anyhow::anyhow!("{e}"))
        }
        None => Config::load().map_err(|e| anyhow::anyhow!("{e}")),
    }
}

fn print_summary(output_dir: &Path, summary: &GenerateSummary) {
    println!("Student copy generated in {}", output_dir.display());
    println!("  Written: {}", summary.written.len());
    println!("  Copied verbatim: {}", summary.copied.len());

    if !summary.skipped.is_empty() {
        println!("  Skipped (missing source): {}", summary.skipped.len());
        for path in &summary.skipped {
            println!("    {}", path.display());
        }
    }

    if !summary.unredacted.is_empty() {
        println!(
            "  Question comments left unredacted: {}",
            summary.unredacted.len()
        );
        for question in &summary.unredacted {
            println!(
                "    {}:{}: {}",
                question.file.display(),
                question.line,
                question.comment
            );
        }
    }

    println!();
    println!(
        "Start walking: cd {} && cargo run",
        output_dir.display()
    );
}
