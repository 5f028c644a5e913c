#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Fatal diagnostics for a graded file.

use thiserror::Error;

/// A problem that stops every check of one file. Each variant names the file
/// so the diagnostic can be shown to the student as-is.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file is not there.
    #[error("❌ File {file_name} not found")]
    NotFound {
        /// Name of the missing file.
        file_name: String,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("❌ Failed to read {file_name}: {source}")]
    Read {
        /// Name of the unreadable file.
        file_name: String,
        /// Underlying I/O error.
        #[source]
        source:    std::io::Error,
    },

    /// The grammar could not be loaded or produced no tree.
    #[error("❌ Could not parse {file_name}: {message}")]
    Parser {
        /// Name of the file being parsed.
        file_name: String,
        /// What went wrong.
        message:   String,
    },

    /// The file is not valid Python.
    #[error("❌ Syntax error in {file_name}: {message} (line {line})")]
    Syntax {
        /// Name of the offending file.
        file_name: String,
        /// Human-readable description.
        message:   String,
        /// 1-based line of the first error.
        line:      usize,
    },
}

impl SourceError {
    /// Name of the file this diagnostic is about.
    pub fn file_name(&self) -> &str {
        match self {
            SourceError::NotFound { file_name }
            | SourceError::Read { file_name, .. }
            | SourceError::Parser { file_name, .. }
            | SourceError::Syntax { file_name, .. } => file_name,
        }
    }
}
