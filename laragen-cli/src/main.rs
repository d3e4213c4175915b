//! laragen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{ArgAction, Parser};
use commands::GenerateCommand;
use laragen_cli_lib::observability;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "laragen")]
#[command(version)]
#[command(
    about = "Generate Repository and Service classes based on a model class name",
    long_about = None
)]
struct Cli {
    /// The name of the model class (e.g., Course, Curriculum)
    #[arg(long = "class", value_name = "NAME")]
    class_name: String,

    /// Base directory for the Laravel application
    #[arg(long, value_name = "DIR", default_value = ".")]
    base_dir: PathBuf,

    /// Controller stub to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    stub: Option<PathBuf>,

    /// Show what would be generated without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = observability::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let cmd = GenerateCommand::new(cli.class_name, cli.base_dir, cli.stub, cli.dry_run);
    match cmd.execute() {
        Ok(report) => {
            tracing::debug!(
                generated = report.generated_count(),
                skipped = report.skipped_count(),
                "generation finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            GenerateCommand::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
