//! # locator-grader
//!
//! An autograder for the Playwright locator practice. It checks that the
//! exercise files are where they should be, inspects them statically without
//! running them, scores them with `flake8` and `pylint`, and reconciles all of
//! that into a single markdown report and exit code.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Runtime configuration and report destinations
pub mod config;
/// Fixed names, limits and timeouts
pub mod constants;
/// Reconciliation of all signals into verdicts and the markdown report
pub mod grade;
/// External linter invocation and the persisted linter artifact
pub mod lint;
/// Bounded subprocess execution
pub mod process;
/// Parsing and static inspection of the graded Python files
pub mod python;
/// Checks for the required directory and files
pub mod structure;
/// Small shared types
pub mod types;
/// Utility functions for convenience
pub mod util;

/// Defined for convenience
type Dict = std::collections::HashMap<String, String>;
