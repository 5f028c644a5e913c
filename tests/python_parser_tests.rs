//! Tests for Python parsing and source loading.

use locator_grader::{
    python::{Parser, SourceError, SourceUnit, queries::IMPORT_FROM_QUERY},
    types::TaskFile,
};

#[test]
fn parser_creates_successfully() {
    let code = r#"
def hello():
    print("Hello, World!")
"#;
    let parser = Parser::new(code.to_string()).expect("parse");
    assert!(parser.syntax_issue().is_none());
}

#[test]
fn parser_extracts_import_names() {
    let code = "from playwright.sync_api import sync_playwright, expect as check\nimport os\n";
    let parser = Parser::new(code.to_string()).expect("parse");
    let matches = parser.query(IMPORT_FROM_QUERY).expect("run query");

    let names: Vec<_> = matches.iter().filter_map(|m| m.get("name")).collect();
    assert!(names.iter().any(|n| n.as_str() == "sync_playwright"));
    assert!(names.iter().any(|n| n.as_str() == "expect"));
    assert!(
        matches
            .iter()
            .all(|m| m.get("module").map(String::as_str) == Some("playwright.sync_api"))
    );
}

#[test]
fn syntax_issue_reports_a_line() {
    let code = "x = 1\n\nif x == 1\n    print(x)\n";
    let parser = Parser::new(code.to_string()).expect("parse");
    let issue = parser.syntax_issue().expect("syntax issue");
    assert!((3..=4).contains(&issue.line), "line {}", issue.line);
}

#[test]
fn broken_source_becomes_a_syntax_diagnostic() {
    let err = SourceUnit::from_code(TaskFile::Form, "task2_form.py", "def f(:\n".into())
        .expect_err("should not load");
    assert!(matches!(err, SourceError::Syntax { .. }));
    assert_eq!(err.file_name(), "task2_form.py");
    assert!(err.to_string().starts_with("❌ Syntax error in task2_form.py"));
}

#[test]
fn python2_print_is_a_syntax_diagnostic() {
    let code = "from playwright.sync_api import sync_playwright\n\nprint 'clicked'\n";
    let err = SourceUnit::from_code(TaskFile::Click, "task1_click.py", code.to_string())
        .expect_err("python 2 print should not load");
    match &err {
        SourceError::Syntax { line, message, .. } => {
            assert_eq!(*line, 3);
            assert!(message.contains("'print'"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}
