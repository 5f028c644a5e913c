#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The textual result stream of the check stage.
//!
//! The check stage prints one line per check:
//!
//! ```text
//! structure::project_folder_exists PASSED
//! structure::required_file_exists[task1_click.py] PASSED
//! syntax::task1_imports PASSED
//! syntax::task1_locators FAILED - ❌ No element lookup found (text, CSS or role)
//! 7 passed, 1 failed
//! ```
//!
//! The summary run reads only the `syntax::` lines back.

use std::{collections::BTreeMap, fmt::Write};

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
    python::CheckResult,
    structure::{PathState, StructureReport},
    types::TaskFile,
};

/// Pattern of one static check result line.
const SYNTAX_LINE: &str = r"(?m)^syntax::(\w+)\s+(PASSED|FAILED)";

/// Renders a single result line.
fn line(out: &mut String, group: &str, name: &str, failure: Option<&str>) {
    let _ = match failure {
        None => writeln!(out, "{group}::{name} PASSED"),
        Some(message) => writeln!(out, "{group}::{name} FAILED - {message}"),
    };
}

/// Renders the structure and check results as a result stream.
pub fn render_stream(structure: &StructureReport, checks: &[CheckResult]) -> String {
    let mut out = String::new();
    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut tally = |ok: bool| if ok { passed += 1 } else { failed += 1 };

    let root_name = structure.root_name();
    let root_failure = match structure.root_state() {
        PathState::Present => None,
        PathState::Missing => Some(format!("❌ Folder {root_name} is missing")),
        PathState::WrongKind => Some(format!("❌ {root_name} is not a directory")),
    };
    tally(root_failure.is_none());
    line(&mut out, "structure", "project_folder_exists", root_failure.as_deref());

    for task in TaskFile::ALL {
        let failure = match structure.file_state(task) {
            PathState::Present => None,
            PathState::Missing => Some(format!("❌ File {task} is missing")),
            PathState::WrongKind => Some(format!("❌ {task} is not a file")),
        };
        tally(failure.is_none());
        line(
            &mut out,
            "structure",
            &format!("required_file_exists[{task}]"),
            failure.as_deref(),
        );
    }

    for check in checks {
        tally(check.passed);
        let failure = (!check.passed).then_some(check.message.as_str());
        line(&mut out, "syntax", &check.check_id, failure);
    }

    let _ = writeln!(out, "{passed} passed, {failed} failed");
    out
}

/// Whether every line of a stream passed.
pub fn stream_passed(stream: &str) -> bool {
    !stream.lines().any(|l| l.contains(" FAILED"))
}

/// Reads per-file static check status back out of a result stream.
///
/// A file passes only when every check attributed to it passed. Files with
/// no attributed line are absent from the map.
pub fn parse_stream(stream: &str) -> Result<BTreeMap<TaskFile, bool>> {
    let pattern = Regex::new(SYNTAX_LINE).context("Invalid result line pattern")?;
    let mut status = BTreeMap::new();

    for caps in pattern.captures_iter(stream) {
        let Some(task) = TaskFile::from_check_id(&caps[1]) else {
            continue;
        };
        let passed = &caps[2] == "PASSED";
        status
            .entry(task)
            .and_modify(|all: &mut bool| *all &= passed)
            .or_insert(passed);
    }

    Ok(status)
}
