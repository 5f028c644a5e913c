#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Runtime configuration for a grading run.
//!
//! Nothing in here reads the environment. The binary resolves environment
//! values once and hands them in, so every stage sees the same explicit
//! configuration.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    time::Duration,
};

use bon::Builder;

use crate::{
    constants::{
        CHECK_TIMEOUT_SECS, LINT_TIMEOUT_SECS, LINTER_ARTIFACT, LOCAL_REPORT, PROJECT_ROOT,
    },
    types::TaskFile,
};

/// Where the markdown report ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    /// A step summary file supplied by CI.
    StepSummary(PathBuf),
    /// A plain file in the workspace.
    Local(PathBuf),
}

impl ReportDestination {
    /// Picks the CI-supplied path when it is set and already exists,
    /// otherwise the local fallback.
    pub fn resolve(step_summary: Option<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        match step_summary {
            Some(path) if !path.as_os_str().is_empty() && path.exists() => {
                ReportDestination::StepSummary(path)
            }
            _ => ReportDestination::Local(fallback.into()),
        }
    }

    /// The file the report is written to.
    pub fn path(&self) -> &Path {
        match self {
            ReportDestination::StepSummary(path) | ReportDestination::Local(path) => path,
        }
    }
}

impl Default for ReportDestination {
    fn default() -> Self {
        ReportDestination::Local(PathBuf::from(LOCAL_REPORT))
    }
}

/// A command that produces the check stream when spawned.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// Program to run.
    pub program: OsString,
    /// Arguments passed to it.
    pub args:    Vec<OsString>,
}

/// Everything a grading run needs to know about its surroundings.
#[derive(Debug, Clone, Builder)]
pub struct GraderConfig {
    /// Directory the grader runs from; the artifact lives here.
    #[builder(default = PathBuf::from("."), into)]
    workspace:          PathBuf,
    /// Project directory, relative to the workspace.
    #[builder(default = PathBuf::from(PROJECT_ROOT), into)]
    project_dir:        PathBuf,
    /// Upper bound for each linter invocation.
    #[builder(default = Duration::from_secs(LINT_TIMEOUT_SECS))]
    lint_timeout:       Duration,
    /// Upper bound for the spawned check stage.
    #[builder(default = Duration::from_secs(CHECK_TIMEOUT_SECS))]
    check_timeout:      Duration,
    /// Spawned check stage; `None` evaluates the checks in-process.
    check_command:      Option<CheckCommand>,
    /// Where the report is written.
    #[builder(default)]
    report_destination: ReportDestination,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GraderConfig {
    /// Directory the grader runs from.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Project directory as the student was asked to name it.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Project directory resolved against the workspace.
    pub fn project_root(&self) -> PathBuf {
        self.workspace.join(&self.project_dir)
    }

    /// Required files relative to the workspace, in report order.
    ///
    /// Linters run from the workspace with these paths, so their findings
    /// read `practice_locators/task1_click.py:3:1: ...`.
    pub fn lint_targets(&self) -> Vec<PathBuf> {
        TaskFile::ALL
            .iter()
            .map(|task| self.project_dir.join(task.file_name()))
            .collect()
    }

    /// Location of the persisted linter artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.workspace.join(LINTER_ARTIFACT)
    }

    /// Upper bound for each linter invocation.
    pub fn lint_timeout(&self) -> Duration {
        self.lint_timeout
    }

    /// Upper bound for the spawned check stage.
    pub fn check_timeout(&self) -> Duration {
        self.check_timeout
    }

    /// Spawned check stage, if any.
    pub fn check_command(&self) -> Option<&CheckCommand> {
        self.check_command.as_ref()
    }

    /// Where the report is written.
    pub fn report_destination(&self) -> &ReportDestination {
        &self.report_destination
    }
}
