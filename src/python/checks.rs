#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The fixed catalog of predicate checks.
//!
//! Imports are checked structurally against the syntax tree. API usage is
//! checked with regular expressions over the raw text: Playwright calls are
//! ordinary method calls, so a tree gives no more certainty than a textual
//! heuristic for such a small, fixed vocabulary.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::error;

use super::{file::SourceUnit, parser::Parser, queries::IMPORT_FROM_QUERY};
use crate::{constants::PLAYWRIGHT_MODULE, types::TaskFile};

/// How a predicate inspects a source file.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// `from <module> import <name>` appears somewhere in the tree.
    ImportFrom {
        /// Exact dotted module name.
        module: &'static str,
        /// Exact imported name; an `as` alias does not matter.
        name:   &'static str,
    },
    /// At least one of the patterns matches the raw text.
    AnyPattern(Vec<Regex>),
}

impl Matcher {
    /// Builds a textual matcher satisfied by any of `patterns`.
    pub fn any_pattern(patterns: &[&str]) -> Result<Self> {
        let compiled = patterns
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("Invalid check pattern: {p}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matcher::AnyPattern(compiled))
    }

    /// Evaluates the matcher against parsed source.
    pub fn matches(&self, parser: &Parser) -> bool {
        match self {
            Matcher::ImportFrom { module, name } => imports_name(parser, module, name),
            Matcher::AnyPattern(patterns) => patterns.iter().any(|re| re.is_match(parser.code())),
        }
    }
}

/// True iff the tree holds `from <module> import <name>` with exactly that
/// module and name. Plain `import <module>` never counts.
pub fn imports_name(parser: &Parser, module: &str, name: &str) -> bool {
    parser
        .query(IMPORT_FROM_QUERY)
        .map(|found| {
            found.iter().any(|capture| {
                capture.get("module").is_some_and(|m| squash(m) == module)
                    && capture.get("name").is_some_and(|n| squash(n) == name)
            })
        })
        .unwrap_or(false)
}

/// Drops whitespace a dotted name may be split with.
fn squash(dotted: &str) -> String {
    dotted.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Outcome of one predicate against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Id of the predicate.
    pub check_id: String,
    /// File it was evaluated against.
    pub task:     TaskFile,
    /// Whether the predicate held.
    pub passed:   bool,
    /// Failure message, or the fatal diagnostic that stopped the file's
    /// checks; empty when passed.
    pub message:  String,
}

/// A named check with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Predicate {
    /// Stable id, prefixed with the file's marker.
    id:              &'static str,
    /// File the check applies to.
    task:            TaskFile,
    /// What the check looks for.
    matcher:         Matcher,
    /// Message reported verbatim on failure.
    failure_message: &'static str,
}

impl Predicate {
    /// Creates a predicate.
    pub fn new(
        id: &'static str,
        task: TaskFile,
        matcher: Matcher,
        failure_message: &'static str,
    ) -> Self {
        Self {
            id,
            task,
            matcher,
            failure_message,
        }
    }

    /// Stable id of the check.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// File the check applies to.
    pub fn task(&self) -> TaskFile {
        self.task
    }

    /// Message reported on failure.
    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }

    /// Whether the check holds for the given source.
    pub fn matches(&self, parser: &Parser) -> bool {
        self.matcher.matches(parser)
    }

    /// Evaluates the check against a loaded file.
    pub fn evaluate(&self, unit: &SourceUnit) -> CheckResult {
        let passed = self.matches(unit.parser());
        CheckResult {
            check_id: self.id.to_string(),
            task: self.task,
            passed,
            message: if passed {
                String::new()
            } else {
                self.failure_message.to_string()
            },
        }
    }

    /// A failed result carrying a diagnostic that stopped the file's checks.
    pub fn aborted(&self, diagnostic: impl Into<String>) -> CheckResult {
        CheckResult {
            check_id: self.id.to_string(),
            task:     self.task,
            passed:   false,
            message:  diagnostic.into(),
        }
    }
}

/// Every check the grader knows, in evaluation order.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// The checks.
    predicates: Vec<Predicate>,
}

impl Catalog {
    /// The checks for the locator practice.
    pub fn standard() -> Result<Self> {
        let playwright_import = || Matcher::ImportFrom {
            module: PLAYWRIGHT_MODULE,
            name:   "sync_playwright",
        };

        let predicates = vec![
            Predicate::new(
                "task1_imports",
                TaskFile::Click,
                playwright_import(),
                "❌ Missing import of sync_playwright",
            ),
            Predicate::new(
                "task1_locators",
                TaskFile::Click,
                Matcher::any_pattern(&[r"get_by_text|text=", r##"locator\("#home"\)"##, r"get_by_role"])?,
                "❌ No element lookup found (text, CSS or role)",
            ),
            Predicate::new(
                "task1_button_click",
                TaskFile::Click,
                Matcher::any_pattern(&[r"\.click\(\)"])?,
                "❌ No .click() call found for the button",
            ),
            Predicate::new(
                "task2_imports",
                TaskFile::Form,
                playwright_import(),
                "❌ Missing import of sync_playwright",
            ),
            Predicate::new(
                "task2_form_locators",
                TaskFile::Form,
                Matcher::any_pattern(&[
                    r#"get_by_placeholder\(["']Enter name["']\)"#,
                    r##"locator\("#fullName"\)"##,
                ])?,
                "❌ No input field lookup found (placeholder or CSS)",
            ),
            Predicate::new(
                "task2_clear",
                TaskFile::Form,
                Matcher::any_pattern(&[r"\.clear\(\)"])?,
                "❌ No .clear() call found to empty the field",
            ),
            Predicate::new(
                "task3_imports",
                TaskFile::Visibility,
                Matcher::ImportFrom {
                    module: PLAYWRIGHT_MODULE,
                    name:   "expect",
                },
                "❌ Missing import of 'expect' from playwright.sync_api",
            ),
            Predicate::new(
                "task3_expect_visible",
                TaskFile::Visibility,
                // `.` stops at line ends, so the call must sit on one line
                Matcher::any_pattern(&[r"expect.*\.to_be_visible\(\)"])?,
                "❌ No expect().to_be_visible() visibility check found",
            ),
        ];

        Ok(Self { predicates })
    }

    /// All checks in evaluation order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Checks that apply to one file.
    pub fn for_task(&self, task: TaskFile) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(move |p| p.task == task)
    }

    /// Looks a check up by id.
    pub fn get(&self, id: &str) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.id == id)
    }
}

/// Loads every required file under `root` and evaluates its checks.
///
/// A file that cannot be loaded fails all of its checks with the diagnostic
/// as message; the remaining files are still checked.
pub fn run_checks(root: &Path, catalog: &Catalog) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for task in TaskFile::ALL {
        match SourceUnit::load(root, task) {
            Ok(unit) => results.extend(catalog.for_task(task).map(|p| p.evaluate(&unit))),
            Err(e) => {
                error!("{e}");
                let diagnostic = e.to_string();
                results.extend(catalog.for_task(task).map(|p| p.aborted(diagnostic.clone())));
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(id: &str, code: &str) -> bool {
        let catalog = Catalog::standard().expect("catalog compiles");
        let parser = Parser::new(code.to_string()).expect("parse");
        catalog.get(id).expect("known check").matches(&parser)
    }

    #[test]
    fn every_file_has_checks() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.predicates().len(), 8);
        assert_eq!(catalog.for_task(TaskFile::Click).count(), 3);
        assert_eq!(catalog.for_task(TaskFile::Form).count(), 3);
        assert_eq!(catalog.for_task(TaskFile::Visibility).count(), 2);
        for p in catalog.predicates() {
            assert_eq!(TaskFile::from_check_id(p.id()), Some(p.task()));
        }
    }

    #[test]
    fn from_import_is_detected() {
        assert!(check("task1_imports", "from playwright.sync_api import sync_playwright\n"));
        assert!(check(
            "task1_imports",
            "from playwright.sync_api import (\n    expect,\n    sync_playwright,\n)\n"
        ));
    }

    #[test]
    fn aliased_import_counts_by_original_name() {
        assert!(check("task3_imports", "from playwright.sync_api import expect as e\n"));
        assert!(!check("task3_imports", "from playwright.sync_api import Page as expect\n"));
    }

    #[test]
    fn nested_import_counts() {
        let code = "def main():\n    from playwright.sync_api import sync_playwright\n    return sync_playwright\n";
        assert!(check("task2_imports", code));
    }

    #[test]
    fn plain_or_wrong_module_import_does_not_count() {
        assert!(!check("task1_imports", "import playwright.sync_api\n"));
        assert!(!check("task1_imports", "from playwright.async_api import sync_playwright\n"));
        assert!(!check("task1_imports", "from playwright import sync_api\n"));
        assert!(!check("task1_imports", "from playwright.sync_api import *\n"));
        assert!(!check("task1_imports", "from .sync_api import sync_playwright\n"));
        assert!(!check("task1_imports", "# from playwright.sync_api import sync_playwright\n"));
    }

    #[test]
    fn element_lookup_accepts_any_alternative() {
        assert!(check("task1_locators", "page.get_by_text('Home').click()\n"));
        assert!(check("task1_locators", "page.locator('text=Home')\n"));
        assert!(check("task1_locators", "page.locator(\"#home\").click()\n"));
        assert!(check("task1_locators", "page.get_by_role('button', name='Home')\n"));
        assert!(!check("task1_locators", "page.locator('#home').click()\n"));
        assert!(!check("task1_locators", "page.locator(\"#about\").click()\n"));
    }

    #[test]
    fn click_needs_empty_call() {
        assert!(check("task1_button_click", "button.click()\n"));
        assert!(!check("task1_button_click", "button.click(force=True)\n"));
        assert!(!check("task1_button_click", "button.dblclick\n"));
    }

    #[test]
    fn form_lookup_alternatives() {
        assert!(check("task2_form_locators", "page.get_by_placeholder('Enter name')\n"));
        assert!(check("task2_form_locators", "page.get_by_placeholder(\"Enter name\")\n"));
        assert!(check("task2_form_locators", "page.locator(\"#fullName\")\n"));
        assert!(!check("task2_form_locators", "page.get_by_placeholder('Name')\n"));
    }

    #[test]
    fn clear_call() {
        assert!(check("task2_clear", "field.clear()\n"));
        assert!(!check("task2_clear", "field.fill('')\n"));
    }

    #[test]
    fn expect_visible_is_single_line() {
        assert!(check(
            "task3_expect_visible",
            "expect(page.get_by_text('Hi')).to_be_visible()\n"
        ));
        assert!(!check(
            "task3_expect_visible",
            "expect(page.get_by_text('Hi'))\nthing.to_be_visible()\n"
        ));
        assert!(!check("task3_expect_visible", "assert el.is_visible()\n"));
    }

    #[test]
    fn failing_check_reports_its_message() {
        let catalog = Catalog::standard().unwrap();
        let unit =
            SourceUnit::from_code(TaskFile::Form, "task2_form.py", "field.fill('x')\n".into())
                .unwrap();
        let result = catalog.get("task2_clear").unwrap().evaluate(&unit);
        assert!(!result.passed);
        assert_eq!(result.message, "❌ No .clear() call found to empty the field");
        assert_eq!(result.task, TaskFile::Form);
    }

    #[test]
    fn unloadable_file_fails_all_its_checks() {
        let root = std::env::temp_dir().join("locator-grader-checks-no-such-root");
        let catalog = Catalog::standard().unwrap();
        let results = run_checks(&root, &catalog);
        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|r| !r.passed));
        assert!(
            results
                .iter()
                .filter(|r| r.task == TaskFile::Click)
                .all(|r| r.message.contains("task1_click.py"))
        );
    }
}
