#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The linter results persisted between the lint and summary runs.

use std::{io::ErrorKind, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::tools::{Linter, LinterReport};
use crate::util::overwrite;

/// Flat record of both linter reports, exactly as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintArtifact {
    /// flake8 score out of 5.
    pub flake8_score:   u32,
    /// Number of flake8 findings.
    pub flake8_errors:  usize,
    /// Every flake8 finding.
    pub flake8_details: Vec<String>,
    /// pylint score out of 5.
    pub pylint_score:   u32,
    /// Number of scored pylint findings.
    pub pylint_errors:  usize,
    /// Every scored pylint finding.
    pub pylint_details: Vec<String>,
    /// Combined score out of 10.
    pub total:          u32,
}

impl LintArtifact {
    /// Combines the two reports.
    pub fn from_reports(flake8: LinterReport, pylint: LinterReport) -> Self {
        Self {
            total:          flake8.score + pylint.score,
            flake8_score:   flake8.score,
            flake8_errors:  flake8.error_count,
            flake8_details: flake8.details,
            pylint_score:   pylint.score,
            pylint_errors:  pylint.error_count,
            pylint_details: pylint.details,
        }
    }

    /// The flake8 half.
    pub fn flake8(&self) -> LinterReport {
        LinterReport {
            tool:        Linter::Flake8,
            score:       self.flake8_score,
            error_count: self.flake8_errors,
            details:     self.flake8_details.clone(),
        }
    }

    /// The pylint half.
    pub fn pylint(&self) -> LinterReport {
        LinterReport {
            tool:        Linter::Pylint,
            score:       self.pylint_score,
            error_count: self.pylint_errors,
            details:     self.pylint_details.clone(),
        }
    }

    /// Both halves, flake8 first.
    pub fn reports(&self) -> [LinterReport; 2] {
        [self.flake8(), self.pylint()]
    }

    /// Writes the artifact as indented JSON, replacing any earlier one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Could not serialize linter results")?;
        overwrite(path, &json)
    }

    /// Reads the artifact; `None` when no lint run has written one.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Could not read {}", path.display()));
            }
        };

        let artifact = serde_json::from_str(&text)
            .with_context(|| format!("Malformed linter results in {}", path.display()))?;
        Ok(Some(artifact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_published_field_names() {
        let artifact = LintArtifact::from_reports(
            Linter::Flake8.report_from_stdout("a.py:1:1: E1 x\n"),
            Linter::Pylint.degraded("boom"),
        );
        let value = serde_json::to_value(&artifact).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "flake8_score",
            "flake8_errors",
            "flake8_details",
            "pylint_score",
            "pylint_errors",
            "pylint_details",
            "total",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(value["total"], 5);
        assert_eq!(value["pylint_details"][0], "Failed to run pylint: boom");
    }

    #[test]
    fn reads_a_hand_written_artifact() {
        let json = r#"{
  "flake8_score": 3,
  "flake8_errors": 4,
  "flake8_details": ["a", "b", "c", "d"],
  "pylint_score": 5,
  "pylint_errors": 0,
  "pylint_details": [],
  "total": 8
}"#;
        let artifact: LintArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.flake8().error_count, 4);
        assert_eq!(artifact.pylint().tool, Linter::Pylint);
        assert_eq!(artifact.total, 8);
    }
}
