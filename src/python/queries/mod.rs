#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Tree-sitter query strings used by the structural checks.

/// Tree-sitter query that returns every name imported with
/// `from <module> import <name>`, one match per imported name. Relative and
/// wildcard imports never match.
/// * `module`: dotted module the names come from
/// * `name`: imported name, before any `as` alias
pub const IMPORT_FROM_QUERY: &str = include_str!("import_from.scm");
