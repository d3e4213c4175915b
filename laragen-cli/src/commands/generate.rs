//! Repository/service/controller generation command
//!
//! # Example
//!
//! ```bash
//! laragen --class Course --base-dir ./api
//! ```

use anyhow::Result;
use console::style;
use laragen_cli_lib::{
    ArtifactKind, ArtifactOutcome, GenerationReport, GenerationRequest, LaragenConfig,
    ScaffoldError, ScaffoldGenerator,
};
use std::path::PathBuf;

const RULE_WIDTH: usize = 60;

/// Generate the artifacts for one model
pub struct GenerateCommand {
    class_name: String,
    base_dir: PathBuf,
    stub: Option<PathBuf>,
    dry_run: bool,
}

impl GenerateCommand {
    /// Create a new command instance
    pub const fn new(
        class_name: String,
        base_dir: PathBuf,
        stub: Option<PathBuf>,
        dry_run: bool,
    ) -> Self {
        Self {
            class_name,
            base_dir,
            stub,
            dry_run,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model file does not exist
    /// - Configuration is invalid
    /// - Writing an artifact fails
    pub fn execute(&self) -> Result<GenerationReport> {
        let mut config = LaragenConfig::load(&self.base_dir)?;
        if let Some(stub) = &self.stub {
            config = config.with_stub_path(stub);
        }

        let request = GenerationRequest::new(self.class_name.clone(), self.base_dir.clone())?;
        let generator = ScaffoldGenerator::new(config)?.with_dry_run(self.dry_run);

        // Checked before the header so a missing model prints nothing else.
        generator.check_model(&request)?;

        println!(
            "Generating repository, service, controller, and interfaces for: {}",
            style(&request.class_name).cyan().bold()
        );
        println!("Base directory: {}", request.base_dir.display());
        if self.dry_run {
            println!("{}", style("Dry run: no files will be written").yellow());
        }
        println!("{}", "-".repeat(RULE_WIDTH));

        let report = generator.generate_with(&request, print_outcome)?;

        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "{} Generation complete for {}",
            style("✓").green().bold(),
            style(&report.class_name).green().bold()
        );
        println!("  {}", summary(&report));

        Ok(report)
    }

    /// Print a failure returned by [`GenerateCommand::execute`]
    pub fn report_error(err: &anyhow::Error) {
        if let Some(ScaffoldError::ModelNotFound { class_name, path }) =
            err.downcast_ref::<ScaffoldError>()
        {
            eprintln!(
                "{} Error: Model file not found at {}",
                style("✗").red().bold(),
                path.display()
            );
            eprintln!(
                "  Please ensure the model {class_name} exists before generating repository and service."
            );
        } else {
            eprintln!("{} Error during generation: {err:#}", style("✗").red().bold());
        }
    }
}

fn print_outcome(kind: ArtifactKind, outcome: &ArtifactOutcome) {
    match outcome {
        ArtifactOutcome::Generated(path) => println!(
            "{} Generated {kind}: {}",
            style("✓").green(),
            path.display()
        ),
        ArtifactOutcome::Planned(path) => println!(
            "{} Would generate {kind}: {}",
            style("•").cyan(),
            path.display()
        ),
        ArtifactOutcome::Skipped(path) => println!(
            "{} Skipped {kind} (already exists): {}",
            style("⊘").yellow(),
            style(path.display()).dim()
        ),
        ArtifactOutcome::MissingStub { stub, .. } => {
            eprintln!(
                "{} Warning: Stub file not found at {}",
                style("✗").yellow().bold(),
                stub.display()
            );
            eprintln!("  Skipping {kind} generation");
        }
    }
}

fn summary(report: &GenerationReport) -> String {
    let mut parts = vec![
        format!("{} generated", report.generated_count()),
        format!("{} skipped", report.skipped_count()),
    ];
    if report.planned_count() > 0 {
        parts.push(format!("{} planned", report.planned_count()));
    }
    if report.missing_stub_count() > 0 {
        parts.push(format!("{} missing stub", report.missing_stub_count()));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_execute_missing_model() {
        let temp_dir = tempdir().unwrap();
        let cmd = GenerateCommand::new(
            "Course".to_string(),
            temp_dir.path().to_path_buf(),
            None,
            false,
        );

        let err = cmd.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ModelNotFound { .. })
        ));
        assert!(!temp_dir.path().join("app/Repo").exists());
    }

    #[test]
    fn test_execute_with_stub_override() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("app/Models")).unwrap();
        fs::write(temp_dir.path().join("app/Models/Room.php"), "<?php\n").unwrap();
        let stub = temp_dir.path().join("custom.stub");
        fs::write(&stub, "class {{ class }} {}\n").unwrap();

        let cmd = GenerateCommand::new(
            "Room".to_string(),
            temp_dir.path().to_path_buf(),
            Some(stub),
            false,
        );
        let report = cmd.execute().unwrap();

        assert_eq!(report.generated_count(), 5);
        let controller =
            fs::read_to_string(temp_dir.path().join("app/Http/Controllers/RoomController.php"))
                .unwrap();
        assert_eq!(controller, "class Room {}\n");
    }

    #[test]
    fn test_summary() {
        let report = GenerationReport {
            class_name: "Course".to_string(),
            outcomes: vec![
                (
                    ArtifactKind::Repository,
                    ArtifactOutcome::Generated(PathBuf::from("a")),
                ),
                (
                    ArtifactKind::Controller,
                    ArtifactOutcome::MissingStub {
                        output: PathBuf::from("b"),
                        stub: PathBuf::from("c"),
                    },
                ),
            ],
        };
        assert_eq!(summary(&report), "1 generated, 0 skipped, 1 missing stub");
    }
}
