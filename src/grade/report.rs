#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Markdown rendering of a grading run.

use std::fmt::Write;

use anyhow::Result;
use tabled::{Table, Tabled, settings::Style};

use super::verdict::{FileVerdict, OverallVerdict, VerdictLabel};
use crate::{
    config::ReportDestination, constants::REPORT_DETAIL_LIMIT, lint::LintArtifact,
    util::overwrite,
};

/// One row of the file table.
#[derive(Tabled)]
struct FileRow {
    /// File name as inline code.
    #[tabled(rename = "File")]
    file:   String,
    /// Status glyph and label.
    #[tabled(rename = "Status")]
    status: String,
    /// Explanation.
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&FileVerdict> for FileRow {
    fn from(verdict: &FileVerdict) -> Self {
        Self {
            file:   format!("`{}`", verdict.task),
            status: verdict.status.label().to_string(),
            reason: verdict.reason.clone(),
        }
    }
}

/// Renders the full report. The output depends only on its inputs, so an
/// unchanged submission always renders the same text.
pub fn render(
    files: &[FileVerdict],
    lint: Option<&LintArtifact>,
    verdict: &OverallVerdict,
    root_name: &str,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# 📊 Automated check: locator practice");
    let _ = writeln!(out);

    let _ = writeln!(out, "## 📁 Structure and check results");
    let _ = writeln!(out);
    let rows: Vec<FileRow> = files.iter().map(FileRow::from).collect();
    let _ = writeln!(out, "{}", Table::new(rows).with(Style::markdown()));
    let _ = writeln!(out);

    if let Some(lint) = lint {
        render_linters(&mut out, lint);
    }

    let _ = writeln!(out, "## 🏆 Final grade");
    let _ = writeln!(out);
    match verdict.label {
        VerdictLabel::Rejected => {
            let _ = writeln!(out, "❌ **NOT ACCEPTED**: the `{root_name}` folder is missing");
        }
        VerdictLabel::NeedsRevision => {
            let _ = writeln!(out, "⚠️ **NEEDS REVISION**: some files did not pass verification");
        }
        VerdictLabel::Accepted => {
            let _ = writeln!(out, "✅ **ACCEPTED**: all files are present and passed verification");
        }
    }
    if let Some(note) = verdict.style_note {
        let _ = writeln!(out, "{}", note.text());
    }
    let _ = writeln!(out);

    let _ = write!(
        out,
        "> 💡 In-class exercise (30-40 minutes). The main focus is using locators correctly."
    );

    out
}

/// Appends the linter section.
fn render_linters(out: &mut String, lint: &LintArtifact) {
    let _ = writeln!(out, "## 🔍 Linter findings");
    let _ = writeln!(out);

    for report in lint.reports() {
        let _ = writeln!(
            out,
            "**{}:** {}/5 points ({} findings)",
            report.tool, report.score, report.error_count
        );
        for (i, detail) in report.details.iter().take(REPORT_DETAIL_LIMIT).enumerate() {
            let _ = writeln!(out, "  {}. `{}`", i + 1, detail);
        }
        if report.details.len() > REPORT_DETAIL_LIMIT {
            let _ = writeln!(out, "  +{} more", report.details.len() - REPORT_DETAIL_LIMIT);
        }
        let _ = writeln!(out);
    }
}

/// Writes the report to its destination, replacing earlier content.
pub fn write_report(destination: &ReportDestination, report: &str) -> Result<()> {
    overwrite(destination.path(), report)
}
