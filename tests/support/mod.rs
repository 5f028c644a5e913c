//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use locator_grader::types::TaskFile;
use uuid::Uuid;

pub const TASK1_GOOD: &str = r#"from playwright.sync_api import sync_playwright

with sync_playwright() as p:
    browser = p.chromium.launch()
    page = browser.new_page()
    page.goto("https://example.com")
    page.get_by_role("button", name="Home").click()
    browser.close()
"#;

pub const TASK2_GOOD: &str = r#"from playwright.sync_api import sync_playwright

with sync_playwright() as p:
    browser = p.chromium.launch()
    page = browser.new_page()
    field = page.get_by_placeholder("Enter name")
    field.fill("Alice")
    field.clear()
    browser.close()
"#;

pub const TASK2_NO_CLEAR: &str = r##"from playwright.sync_api import sync_playwright

with sync_playwright() as p:
    browser = p.chromium.launch()
    page = browser.new_page()
    field = page.locator("#fullName")
    field.fill("")
    browser.close()
"##;

pub const TASK3_GOOD: &str = r#"from playwright.sync_api import sync_playwright, expect

with sync_playwright() as p:
    browser = p.chromium.launch()
    page = browser.new_page()
    expect(page.get_by_text("Welcome")).to_be_visible()
    browser.close()
"#;

/// A fresh, empty workspace directory.
pub fn temp_workspace() -> PathBuf {
    let root = std::env::temp_dir().join(format!("locator-grader-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp workspace");
    root
}

/// Creates `practice_locators/` under `workspace` and returns it.
pub fn project_dir(workspace: &Path) -> PathBuf {
    let dir = workspace.join("practice_locators");
    fs::create_dir_all(&dir).expect("create project dir");
    dir
}

/// Writes one task file into the project directory.
pub fn write_task(project: &Path, task: TaskFile, code: &str) {
    fs::write(project.join(task.file_name()), code).expect("write task file");
}

/// A workspace whose submission passes every check.
pub fn passing_workspace() -> PathBuf {
    let workspace = temp_workspace();
    let project = project_dir(&workspace);
    write_task(&project, TaskFile::Click, TASK1_GOOD);
    write_task(&project, TaskFile::Form, TASK2_GOOD);
    write_task(&project, TaskFile::Visibility, TASK3_GOOD);
    workspace
}

pub fn cleanup(dir: PathBuf) {
    let _ = fs::remove_dir_all(dir);
}
