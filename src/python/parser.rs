#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Tree-sitter parser wrapper for Python source code.

use std::fmt::Formatter;

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Language, Node, Query, QueryCursor, StreamingIterator, Tree};

use crate::Dict;

/// Parsed Python source: the text plus its syntax tree.
#[derive(Clone)]
pub struct Parser {
    /// The source code being parsed.
    code: String,
    /// The parse tree.
    tree: Tree,
    /// The tree-sitter Python grammar language.
    lang: Language,
}

/// First syntax error found in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// 1-based line number.
    pub line:    usize,
    /// Human-readable description.
    pub message: String,
}

/// Returns the compiled tree-sitter Python language.
fn python_language() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("lines", &self.code.lines().count())
            .field("has_error", &self.tree.root_node().has_error())
            .finish()
    }
}

impl Parser {
    /// Parses `source_code` without executing it.
    ///
    /// Succeeds for syntactically broken code too; use
    /// [`Parser::syntax_issue`] to find out whether the tree is clean.
    pub fn new(source_code: String) -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        let language = python_language();

        parser
            .set_language(&language)
            .with_context(|| "Failed to load Python grammar")?;
        let tree = parser
            .parse(source_code.as_str(), None)
            .ok_or_else(|| anyhow!("Error parsing Python code"))?;

        Ok(Self {
            code: source_code,
            tree,
            lang: language,
        })
    }

    /// A getter for parser's source code.
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Returns the parse tree's root node.
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns the first (leftmost, outermost) error in the tree, if any.
    ///
    /// The grammar also accepts Python 2 `print` and `exec` statements; those
    /// are reported here too. Errors CPython only finds after parsing, such
    /// as repeated keyword arguments or duplicate parameter names, are not
    /// detected.
    pub fn syntax_issue(&self) -> Option<SyntaxIssue> {
        let root = self.tree.root_node();
        if !root.has_error() {
            return self.legacy_statement(root);
        }

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_missing() {
                return Some(SyntaxIssue {
                    line:    node.start_position().row + 1,
                    message: format!("expected '{}'", node.kind()),
                });
            }
            if node.is_error() {
                return Some(SyntaxIssue {
                    line:    node.start_position().row + 1,
                    message: "invalid syntax".to_string(),
                });
            }

            let mut cursor = node.walk();
            let erroneous: Vec<Node<'_>> = node
                .children(&mut cursor)
                .filter(|child| child.has_error())
                .collect();
            // reversed so the leftmost child is popped first
            stack.extend(erroneous.into_iter().rev());
        }

        Some(SyntaxIssue {
            line:    root.start_position().row + 1,
            message: "invalid syntax".to_string(),
        })
    }

    /// First Python 2 only statement under `root`, in source order.
    fn legacy_statement(&self, root: Node<'_>) -> Option<SyntaxIssue> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let keyword = match node.kind() {
                "print_statement" => Some("print"),
                "exec_statement" => Some("exec"),
                _ => None,
            };
            if let Some(keyword) = keyword {
                return Some(SyntaxIssue {
                    line:    node.start_position().row + 1,
                    message: format!("Missing parentheses in call to '{keyword}'"),
                });
            }

            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
        None
    }

    /// Applies a tree sitter query and returns the result as a collection of
    /// HashMaps.
    ///
    /// * `q`: the tree-sitter query to be applied
    pub fn query(&self, q: &str) -> Result<Vec<Dict>> {
        let mut results = vec![];

        let query = Query::new(&self.lang, q)
            .with_context(|| format!("Failed to compile tree-sitter query: {q}"))?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, self.tree.root_node(), self.code.as_bytes());
        let mut capture_indices = Vec::new();

        for name in query.capture_names() {
            let index = query
                .capture_index_for_name(name)
                .ok_or_else(|| anyhow!("Capture name {name} has no index associated."))?;
            capture_indices.push((index, name.to_string()));
        }

        while let Some(m) = matches.next() {
            let mut result = Dict::new();

            for (index, name) in &capture_indices {
                let Some(value) = m.captures.iter().find(|c| c.index == *index) else {
                    continue;
                };

                let value = value
                    .node
                    .utf8_text(self.code.as_bytes())
                    .with_context(|| format!("Cannot map capture {name} to source text"))?;

                result.insert(name.clone(), value.to_string());
            }
            results.push(result);
        }

        Ok(results)
    }
}
