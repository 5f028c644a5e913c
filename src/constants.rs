#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Name of the directory the student must create.
pub const PROJECT_ROOT: &str = "practice_locators";

/// File the linter stage persists its results to, relative to the workspace.
pub const LINTER_ARTIFACT: &str = "linters_result.json";

/// Report file used when no step summary destination is available.
pub const LOCAL_REPORT: &str = "SUMMARY.md";

/// Environment variable CI uses to hand out a step summary file.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Seconds each linter may run before it is abandoned.
pub const LINT_TIMEOUT_SECS: u64 = 30;

/// Seconds the check stage may run when spawned as a subprocess.
pub const CHECK_TIMEOUT_SECS: u64 = 120;

/// Highest score a single linter can award.
pub const MAX_TOOL_SCORE: usize = 5;

/// Combined linter score from which the style is considered compliant.
pub const STYLE_PASS_THRESHOLD: u32 = 5;

/// Line length handed to flake8.
pub const MAX_LINE_LENGTH: u32 = 88;

/// Linter detail lines listed per tool in the markdown report.
pub const REPORT_DETAIL_LIMIT: usize = 15;

/// Linter detail lines listed per tool on the console.
pub const CONSOLE_DETAIL_LIMIT: usize = 25;

/// Module every Playwright import must come from.
pub const PLAYWRIGHT_MODULE: &str = "playwright.sync_api";
