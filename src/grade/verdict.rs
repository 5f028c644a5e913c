#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Reconciliation of structure, static checks and linter scores into
//! verdicts.

use std::{collections::BTreeMap, fmt::Display};

use serde::Serialize;

use crate::{constants::STYLE_PASS_THRESHOLD, structure::StructureReport, types::TaskFile};

/// Classification of one required file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileStatus {
    /// The file does not exist.
    Missing,
    /// The file exists and every static check passed.
    Passed,
    /// The file exists but a check failed or none was observed.
    NeedsFix,
}

impl FileStatus {
    /// Glyph and label used in the report table.
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Missing => "❌ missing",
            FileStatus::Passed => "✅ passed",
            FileStatus::NeedsFix => "⚠️ needs fix",
        }
    }

    /// Explanation used in the report table.
    pub fn reason(self) -> &'static str {
        match self {
            FileStatus::Missing => "File not found",
            FileStatus::Passed => "File exists and passed verification",
            FileStatus::NeedsFix => "File exists but failed verification",
        }
    }
}

impl Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Verdict for one required file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileVerdict {
    /// The file.
    pub task:   TaskFile,
    /// Its classification.
    pub status: FileStatus,
    /// Why.
    pub reason: String,
}

/// Classifies one file. Existence is decided first, then the checks.
pub fn reconcile_file(task: TaskFile, exists: bool, checks_passed: Option<bool>) -> FileVerdict {
    let status = if !exists {
        FileStatus::Missing
    } else if checks_passed == Some(true) {
        FileStatus::Passed
    } else {
        FileStatus::NeedsFix
    };

    FileVerdict {
        task,
        status,
        reason: status.reason().to_string(),
    }
}

/// Classifies every required file, in report order.
pub fn reconcile(
    structure: &StructureReport,
    check_status: &BTreeMap<TaskFile, bool>,
) -> Vec<FileVerdict> {
    TaskFile::ALL
        .into_iter()
        .map(|task| reconcile_file(task, structure.exists(task), check_status.get(&task).copied()))
        .collect()
}

/// Classification of the whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictLabel {
    /// Everything required is in place.
    Accepted,
    /// Some file needs work.
    NeedsRevision,
    /// The project directory is missing.
    Rejected,
}

/// Advisory remark on style, attached to an accepted submission only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleNote {
    /// Combined linter score reached the threshold.
    Compliant,
    /// Linter score too low, or no linter results were available.
    ImprovementsRecommended,
}

impl StyleNote {
    /// Line used in the report.
    pub fn text(self) -> &'static str {
        match self {
            StyleNote::Compliant => "✅ Code style is compliant",
            StyleNote::ImprovementsRecommended => {
                "💡 Style improvements recommended: address the linter findings"
            }
        }
    }
}

/// Verdict for the whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallVerdict {
    /// The classification.
    pub label:      VerdictLabel,
    /// Process exit code: 0 only when accepted.
    pub exit_code:  u8,
    /// Style remark; never affects the exit code.
    pub style_note: Option<StyleNote>,
}

/// Decides the overall verdict.
///
/// Precedence: a missing project directory rejects; any file needing a fix
/// asks for revision; otherwise the work is accepted. A file that is only
/// missing does not by itself block acceptance.
pub fn overall(root_exists: bool, files: &[FileVerdict], lint_total: Option<u32>) -> OverallVerdict {
    if !root_exists {
        return OverallVerdict {
            label:      VerdictLabel::Rejected,
            exit_code:  1,
            style_note: None,
        };
    }

    if files.iter().any(|f| f.status == FileStatus::NeedsFix) {
        return OverallVerdict {
            label:      VerdictLabel::NeedsRevision,
            exit_code:  1,
            style_note: None,
        };
    }

    let style_note = match lint_total {
        Some(total) if total >= STYLE_PASS_THRESHOLD => StyleNote::Compliant,
        _ => StyleNote::ImprovementsRecommended,
    };

    OverallVerdict {
        label:      VerdictLabel::Accepted,
        exit_code:  0,
        style_note: Some(style_note),
    }
}
