#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A graded Python file loaded from the project directory.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{error::SourceError, parser::Parser};
use crate::types::TaskFile;

/// One graded file, read and parsed.
///
/// A `SourceUnit` only exists for a file that was read and parsed cleanly;
/// every other outcome is a [`SourceError`].
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Which exercise file this is.
    task:   TaskFile,
    /// Where it was read from.
    path:   PathBuf,
    /// Source text and syntax tree.
    parser: Parser,
}

impl SourceUnit {
    /// Reads `task`'s file under `root` and parses it.
    pub fn load(root: &Path, task: TaskFile) -> Result<Self, SourceError> {
        let path = root.join(task.file_name());
        let file_name = task.file_name().to_string();

        let code = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                file_name: file_name.clone(),
            },
            _ => SourceError::Read {
                file_name: file_name.clone(),
                source,
            },
        })?;

        Self::from_code(task, path, code)
    }

    /// Parses already-read source for `task`.
    pub fn from_code(
        task: TaskFile,
        path: impl Into<PathBuf>,
        code: String,
    ) -> Result<Self, SourceError> {
        let file_name = task.file_name().to_string();
        let parser = Parser::new(code).map_err(|e| SourceError::Parser {
            file_name: file_name.clone(),
            message:   e.to_string(),
        })?;

        if let Some(issue) = parser.syntax_issue() {
            return Err(SourceError::Syntax {
                file_name,
                message: issue.message,
                line: issue.line,
            });
        }

        Ok(Self {
            task,
            path: path.into(),
            parser,
        })
    }

    /// Which exercise file this is.
    pub fn task(&self) -> TaskFile {
        self.task
    }

    /// Where the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw source text.
    pub fn code(&self) -> &str {
        self.parser.code()
    }

    /// Parsed representation.
    pub fn parser(&self) -> &Parser {
        &self.parser
    }
}
