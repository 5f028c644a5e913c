#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The two external linters and how their output becomes a score.

use std::{
    ffi::{OsStr, OsString},
    fmt::Display,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    constants::{MAX_LINE_LENGTH, MAX_TOOL_SCORE},
    process::{self, ProcessError},
};

/// pylint message categories and codes that are scored.
const PYLINT_ENABLED: &str = "E,F,C0301,C0303,W0611,W0612";

/// An external linter the grader knows how to run and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    /// Style checker; one point lost per two findings.
    Flake8,
    /// Restricted to errors, fatals, long lines, trailing whitespace and
    /// unused imports/variables; one point lost per finding.
    Pylint,
}

impl Linter {
    /// Executable name.
    pub fn program(self) -> &'static str {
        match self {
            Linter::Flake8 => "flake8",
            Linter::Pylint => "pylint",
        }
    }

    /// Flags placed before the target files. Both tools run in a mode where
    /// findings never make them fail.
    pub fn flags(self) -> Vec<OsString> {
        match self {
            Linter::Flake8 => vec![
                "--exit-zero".into(),
                format!("--max-line-length={MAX_LINE_LENGTH}").into(),
            ],
            Linter::Pylint => vec![
                "--exit-zero".into(),
                "--output-format=text".into(),
                "--score=no".into(),
                "--disable=all".into(),
                format!("--enable={PYLINT_ENABLED}").into(),
            ],
        }
    }

    /// Whether a non-blank stdout line counts as a finding.
    pub fn is_finding(self, line: &str) -> bool {
        match self {
            Linter::Flake8 => true,
            Linter::Pylint => {
                line.starts_with("E:")
                    || line.starts_with("F:")
                    || line.contains("C030")
                    || line.contains("W0611")
                    || line.contains("W0612")
            }
        }
    }

    /// Score for a number of findings, between 0 and 5.
    pub fn score(self, error_count: usize) -> u32 {
        let penalty = match self {
            Linter::Flake8 => error_count / 2,
            Linter::Pylint => error_count,
        };
        // bounded by MAX_TOOL_SCORE, so the cast cannot truncate
        MAX_TOOL_SCORE.saturating_sub(penalty) as u32
    }

    /// Turns captured stdout into a report. Findings keep emission order.
    pub fn report_from_stdout(self, stdout: &str) -> LinterReport {
        let details: Vec<String> = stdout
            .lines()
            .filter(|line| !line.trim().is_empty() && self.is_finding(line))
            .map(|line| line.trim().to_string())
            .collect();

        LinterReport {
            tool: self,
            score: self.score(details.len()),
            error_count: details.len(),
            details,
        }
    }

    /// Neutral report for a run that produced no usable output.
    pub fn degraded(self, reason: impl Display) -> LinterReport {
        LinterReport {
            tool:        self,
            score:       0,
            error_count: 0,
            details:     vec![format!("Failed to run {}: {reason}", self.program())],
        }
    }
}

impl Display for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// One linter's findings, reduced to a score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterReport {
    /// Which linter produced this.
    pub tool:        Linter,
    /// Score out of 5.
    pub score:       u32,
    /// Number of findings.
    pub error_count: usize,
    /// Findings in emission order, or one synthetic line for a failed run.
    pub details:     Vec<String>,
}

/// Runs `linter` through `program` against `files`, never failing.
///
/// A launch failure or timeout degrades to a zero score with one detail line
/// describing what happened. Stderr and the exit status are ignored.
pub async fn run_linter(
    linter: Linter,
    program: impl AsRef<OsStr>,
    files: &[PathBuf],
    cwd: Option<&Path>,
    deadline: Duration,
) -> LinterReport {
    let mut args = linter.flags();
    args.extend(files.iter().map(|f| f.as_os_str().to_os_string()));

    match process::run_collect(program, &args, cwd, deadline).await {
        Ok(collected) => {
            let report = linter.report_from_stdout(&collected.stdout_text());
            info!("{linter}: {} findings, {}/5", report.error_count, report.score);
            report
        }
        Err(e) => {
            warn!("{linter} could not be run: {e}");
            linter.degraded(describe(&e))
        }
    }
}

/// Short, student-facing description of a process failure.
fn describe(err: &ProcessError) -> String {
    match err {
        ProcessError::TimedOut { limit, .. } => format!("timed out after {}s", limit.as_secs()),
        other => other.to_string(),
    }
}
