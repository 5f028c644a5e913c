#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Checks for the required project directory and files.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::{info, warn};

use crate::types::TaskFile;

/// What was found at an expected path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// Present with the expected kind.
    Present,
    /// Nothing there.
    Missing,
    /// Something there, but a file where a directory was expected or the
    /// other way round.
    WrongKind,
}

impl PathState {
    /// Whether the path is usable.
    pub fn exists(self) -> bool {
        matches!(self, PathState::Present)
    }
}

/// Result of checking the project layout.
#[derive(Debug, Clone)]
pub struct StructureReport {
    /// Project directory that was checked.
    root:       PathBuf,
    /// State of the project directory itself.
    root_state: PathState,
    /// State of every required file.
    files:      BTreeMap<TaskFile, PathState>,
}

/// Inspects `root` and the required files beneath it.
///
/// When `root` is not a directory every file is reported missing without
/// touching the filesystem again.
pub fn check_structure(root: &Path) -> StructureReport {
    let root_state = if root.is_dir() {
        PathState::Present
    } else if root.exists() {
        PathState::WrongKind
    } else {
        PathState::Missing
    };

    let files = TaskFile::ALL
        .into_iter()
        .map(|task| {
            let state = if !root_state.exists() {
                PathState::Missing
            } else {
                let path = root.join(task.file_name());
                if path.is_file() {
                    PathState::Present
                } else if path.exists() {
                    PathState::WrongKind
                } else {
                    PathState::Missing
                }
            };
            (task, state)
        })
        .collect::<BTreeMap<_, _>>();

    let report = StructureReport {
        root: root.to_path_buf(),
        root_state,
        files,
    };

    if !report.root_exists() {
        warn!("Project directory {} is missing", root.display());
    } else if report.is_complete() {
        info!("Project structure is complete");
    } else {
        warn!("Missing required files: {}", report.missing().iter().join(", "));
    }

    report
}

impl StructureReport {
    /// Project directory that was checked.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Display name of the project directory.
    pub fn root_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// State of the project directory.
    pub fn root_state(&self) -> PathState {
        self.root_state
    }

    /// Whether the project directory exists and is a directory.
    pub fn root_exists(&self) -> bool {
        self.root_state.exists()
    }

    /// State of one required file.
    pub fn file_state(&self, task: TaskFile) -> PathState {
        self.files.get(&task).copied().unwrap_or(PathState::Missing)
    }

    /// Whether one required file exists and is a regular file.
    pub fn exists(&self, task: TaskFile) -> bool {
        self.file_state(task).exists()
    }

    /// Required files that are not usable, in report order.
    pub fn missing(&self) -> Vec<TaskFile> {
        TaskFile::ALL
            .into_iter()
            .filter(|task| !self.exists(*task))
            .collect()
    }

    /// Whether the directory and all files are present.
    pub fn is_complete(&self) -> bool {
        self.root_exists() && self.missing().is_empty()
    }
}
