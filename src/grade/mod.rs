#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Grading: turns the structure check, the check stream and the linter
//! artifact into verdicts and a report.

/// Markdown report rendering and output.
pub mod report;
/// The check stage's textual result stream.
pub mod results;
/// Per-file and overall reconciliation rules.
pub mod verdict;

use anyhow::{Context, Result};
use tracing::{info, warn};

pub use results::{parse_stream, render_stream, stream_passed};
pub use verdict::{
    FileStatus, FileVerdict, OverallVerdict, StyleNote, VerdictLabel, overall, reconcile,
};

use crate::{
    config::GraderConfig,
    lint::LintArtifact,
    process,
    python::{Catalog, run_checks},
    structure::{StructureReport, check_structure},
};

/// Everything a summary run decided.
#[derive(Debug, Clone)]
pub struct GradeOutcome {
    /// One verdict per required file, in report order.
    pub files:   Vec<FileVerdict>,
    /// The submission's verdict.
    pub verdict: OverallVerdict,
    /// Rendered markdown.
    pub report:  String,
}

/// Reconciles the three signal sources and renders the report. Pure: no
/// filesystem or process access.
pub fn grade(
    structure: &StructureReport,
    check_stream: &str,
    lint: Option<&LintArtifact>,
) -> Result<GradeOutcome> {
    let check_status = parse_stream(check_stream)?;
    let files = reconcile(structure, &check_status);
    let verdict = overall(structure.root_exists(), &files, lint.map(|l| l.total));
    let report = report::render(&files, lint, &verdict, &structure.root_name());

    Ok(GradeOutcome {
        files,
        verdict,
        report,
    })
}

/// Runs the check stage in-process and returns its result stream.
pub fn check_stream(structure: &StructureReport) -> Result<String> {
    let catalog = Catalog::standard()?;
    let checks = run_checks(structure.root(), &catalog);
    Ok(render_stream(structure, &checks))
}

/// Obtains the check stream, spawning the configured check command when
/// there is one. A failed or timed-out spawn yields an empty stream, which
/// leaves every existing file unverified.
async fn collect_check_stream(config: &GraderConfig, structure: &StructureReport) -> Result<String> {
    let Some(command) = config.check_command() else {
        return check_stream(structure);
    };

    match process::run_collect(
        &command.program,
        &command.args,
        Some(config.workspace()),
        config.check_timeout(),
    )
    .await
    {
        Ok(collected) => Ok(collected.stdout_text()),
        Err(e) => {
            warn!("Check stage could not be run: {e}");
            Ok(String::new())
        }
    }
}

/// The full summary run: structure, checks, reconciliation, linter results,
/// report. Writes the report to the configured destination.
pub async fn run_summary(config: &GraderConfig) -> Result<GradeOutcome> {
    info!("Checking project structure...");
    let structure = check_structure(&config.project_root());

    info!("Running static checks...");
    let stream = collect_check_stream(config, &structure).await?;

    let lint = LintArtifact::load(&config.artifact_path())?;
    if lint.is_none() {
        info!("No linter results at {}, skipping that section", config.artifact_path().display());
    }

    let outcome = grade(&structure, &stream, lint.as_ref())?;

    let destination = config.report_destination();
    report::write_report(destination, &outcome.report)
        .with_context(|| format!("Could not save the report to {}", destination.path().display()))?;
    info!("Report written to {}", destination.path().display());

    Ok(outcome)
}
