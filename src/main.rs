#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # locator-grader
//!
//! Grades the Playwright locator practice. Typical CI usage:
//!
//! ```text
//! locator-grader lint      # runs flake8 and pylint, saves linters_result.json
//! locator-grader summary   # reconciles everything and writes the report
//! ```

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use locator_grader::{
    config::{CheckCommand, GraderConfig, ReportDestination},
    constants::{LOCAL_REPORT, PROJECT_ROOT, STEP_SUMMARY_ENV},
    grade::{self, check_stream, stream_passed},
    lint::{self, console_summary, lint_exit_code},
    structure::check_structure,
    types::TaskFile,
    util::grader_path,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands. Each carries the project directory.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the static checks and print the result stream
    Check(PathBuf),
    /// Check that the project directory and files exist
    Structure(PathBuf),
    /// Run the linters and save their results
    Lint(PathBuf),
    /// Produce the final report
    Summary(PathBuf, Option<PathBuf>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the project directory
    fn root() -> impl Parser<PathBuf> {
        long("root")
            .help("Project directory to grade")
            .argument::<PathBuf>("DIR")
            .fallback(PathBuf::from(PROJECT_ROOT))
    }

    /// parses an explicit report path
    fn report() -> impl Parser<Option<PathBuf>> {
        long("report")
            .help("Write the report here instead of the step summary or SUMMARY.md")
            .argument::<PathBuf>("PATH")
            .optional()
    }

    let check = construct!(Cmd::Check(root()))
        .to_options()
        .command("check")
        .help("Run the static checks and print one result line per check");

    let structure = construct!(Cmd::Structure(root()))
        .to_options()
        .command("structure")
        .help("Check that the project directory and required files exist");

    let lint = construct!(Cmd::Lint(root()))
        .to_options()
        .command("lint")
        .help("Run flake8 and pylint and save their results");

    let summary = construct!(Cmd::Summary(root(), report()))
        .to_options()
        .command("summary")
        .help("Reconcile all results into the final report");

    let cmd = construct!([check, structure, lint, summary]);

    cmd.to_options()
        .descr("Autograder for the Playwright locator practice")
        .run()
}

/// Builds the run configuration from the command line and environment.
fn config_for(root: PathBuf, report: Option<PathBuf>, spawn_checks: bool) -> GraderConfig {
    let destination = match report {
        Some(path) => ReportDestination::Local(path),
        None => ReportDestination::resolve(
            std::env::var_os(STEP_SUMMARY_ENV).map(PathBuf::from),
            LOCAL_REPORT,
        ),
    };

    let check_command = spawn_checks.then(|| CheckCommand {
        program: grader_path(),
        args:    vec!["check".into(), "--root".into(), root.clone().into_os_string()],
    });

    GraderConfig::builder()
        .project_dir(root)
        .maybe_check_command(check_command)
        .report_destination(destination)
        .build()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenv().ok();

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let code = match options() {
        Cmd::Check(root) => {
            let config = config_for(root, None, false);
            let structure = check_structure(&config.project_root());
            let stream = check_stream(&structure)?;
            print!("{stream}");
            u8::from(!stream_passed(&stream))
        }
        Cmd::Structure(root) => {
            let config = config_for(root, None, false);
            let structure = check_structure(&config.project_root());
            if !structure.root_exists() {
                println!("{} Folder {} is missing", "❌".red(), structure.root_name());
            }
            for task in TaskFile::ALL {
                if structure.exists(task) {
                    println!("{} {task}", "✅".green());
                } else {
                    println!("{} {task} is missing", "❌".red());
                }
            }
            u8::from(!structure.is_complete())
        }
        Cmd::Lint(root) => {
            let config = config_for(root, None, false);
            let structure = check_structure(&config.project_root());
            if !structure.root_exists() {
                println!("❌ Folder {} not found!", structure.root_name());
                1
            } else if !structure.missing().is_empty() {
                println!("❌ Missing files:");
                for task in structure.missing() {
                    println!("   - {}", config.project_dir().join(task.file_name()).display());
                }
                1
            } else {
                let artifact = lint::lint_and_save(&config).await?;
                print!("{}", console_summary(&artifact));
                lint_exit_code(&artifact)
            }
        }
        Cmd::Summary(root, report) => {
            let config = config_for(root, report, true);
            let outcome = grade::run_summary(&config).await?;
            outcome.verdict.exit_code
        }
    };

    Ok(ExitCode::from(code))
}
