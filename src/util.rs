#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use which::which;

/// Finds and returns the path to an executable on `PATH`
pub fn tool_path(name: &str) -> Result<PathBuf> {
    which(name).with_context(|| format!("Cannot find {name} on path"))
}

/// Returns the path to the running grader, falling back to the name it is
/// installed under.
pub fn grader_path() -> OsString {
    match std::env::current_exe() {
        Ok(path) => path.into_os_string(),
        Err(_) => match which("locator-grader") {
            Ok(path) => path.into_os_string(),
            Err(_) => "locator-grader".into(),
        },
    }
}

/// Writes `contents` to `path`, replacing whatever was there.
pub fn overwrite(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Could not write {}", path.display()))
}
