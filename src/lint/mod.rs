#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Runs the external linters and persists what they found.

/// The persisted linter artifact.
pub mod artifact;
/// Linter definitions, scoring and invocation.
pub mod tools;

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;
use tracing::{info, warn};

pub use artifact::LintArtifact;
pub use tools::{Linter, LinterReport, run_linter};

use crate::{
    config::GraderConfig,
    constants::{CONSOLE_DETAIL_LIMIT, STYLE_PASS_THRESHOLD},
    util::tool_path,
};

/// Runs one linter, resolving its executable from `PATH` first.
async fn run_installed(linter: Linter, config: &GraderConfig) -> LinterReport {
    match tool_path(linter.program()) {
        Ok(program) => {
            run_linter(
                linter,
                program,
                &config.lint_targets(),
                Some(config.workspace()),
                config.lint_timeout(),
            )
            .await
        }
        Err(e) => {
            warn!("{e}");
            linter.degraded(format!("{} is not installed", linter.program()))
        }
    }
}

/// Runs flake8 then pylint against the required files. Each tool degrades
/// on its own; neither can stop the other.
pub async fn run_linters(config: &GraderConfig) -> LintArtifact {
    info!("Running linters...");
    let flake8 = run_installed(Linter::Flake8, config).await;
    let pylint = run_installed(Linter::Pylint, config).await;
    LintArtifact::from_reports(flake8, pylint)
}

/// Runs both linters and persists the artifact where the summary run will
/// look for it.
pub async fn lint_and_save(config: &GraderConfig) -> Result<LintArtifact> {
    let artifact = run_linters(config).await;
    artifact.save(&config.artifact_path())?;
    info!("Linter results saved to {}", config.artifact_path().display());
    Ok(artifact)
}

/// Exit code of a standalone lint run.
pub fn lint_exit_code(artifact: &LintArtifact) -> u8 {
    if artifact.total >= STYLE_PASS_THRESHOLD { 0 } else { 1 }
}

/// Human-readable console summary of a lint run.
pub fn console_summary(artifact: &LintArtifact) -> String {
    let mut out = String::new();

    for report in artifact.reports() {
        let _ = writeln!(out, "🔍 {} results:", report.tool.to_string().bold());
        let _ = writeln!(out, "   Score: {}/5", report.score);
        let _ = writeln!(out, "   Findings: {}", report.error_count);
        for (i, detail) in report.details.iter().take(CONSOLE_DETAIL_LIMIT).enumerate() {
            let _ = writeln!(out, "   {}. {}", i + 1, detail);
        }
        if report.details.len() > CONSOLE_DETAIL_LIMIT {
            let _ = writeln!(
                out,
                "   ... and {} more",
                report.details.len() - CONSOLE_DETAIL_LIMIT
            );
        }
        out.push('\n');
    }

    let total = format!("{}/10", artifact.total);
    let total = if artifact.total >= STYLE_PASS_THRESHOLD {
        total.green()
    } else {
        total.yellow()
    };
    let _ = writeln!(out, "📊 Linters total: {total} points");
    out
}
