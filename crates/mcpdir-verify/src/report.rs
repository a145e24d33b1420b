//! Verification results and the end-of-run summary.

use serde::Serialize;
use std::fmt::Write as _;

use crate::github::GithubCheck;
use crate::npm::NpmCheck;

/// Bucket an entry lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Valid,
    Invalid,
    Warning,
}

/// Checks performed for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub name: String,
    pub homepage: Option<String>,
    pub github: GithubCheck,
    pub npm_package: Option<String>,
    pub npm: NpmCheck,
}

impl ReportEntry {
    /// A broken homepage is invalid regardless of npm. A good homepage with a
    /// definitely missing package is a warning.
    pub fn outcome(&self) -> Outcome {
        if !self.github.is_valid() {
            Outcome::Invalid
        } else if self.npm_package.is_some() && self.npm.is_invalid() {
            Outcome::Warning
        } else {
            Outcome::Valid
        }
    }

    /// Indented progress lines printed after the entry is checked.
    pub fn status_lines(&self) -> Vec<String> {
        match self.outcome() {
            Outcome::Invalid => {
                let mut lines = vec![format!(
                    "  ✗ GitHub: {}",
                    self.github.error().unwrap_or_default()
                )];
                if let Some(err) = self.npm.error() {
                    lines.push(format!("  ✗ npm: {err}"));
                }
                lines
            }
            Outcome::Warning => vec![format!(
                "  ⚠ GitHub OK, but npm package {} not found",
                self.npm_package.as_deref().unwrap_or_default()
            )],
            Outcome::Valid => vec!["  ✓ Valid".to_string()],
        }
    }
}

/// Entries sorted into buckets. Each entry is pushed exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: Vec<ReportEntry>,
    pub invalid: Vec<ReportEntry>,
    pub warnings: Vec<ReportEntry>,
}

impl Report {
    pub fn push(&mut self, entry: ReportEntry) {
        match entry.outcome() {
            Outcome::Valid => self.valid.push(entry),
            Outcome::Invalid => self.invalid.push(entry),
            Outcome::Warning => self.warnings.push(entry),
        }
    }

    /// Number of entries checked.
    pub fn checked(&self) -> usize {
        self.valid.len() + self.invalid.len() + self.warnings.len()
    }

    /// Human-readable end-of-run summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Summary ===");
        let _ = writeln!(out, "Valid: {}", self.valid.len());
        let _ = writeln!(out, "Invalid: {}", self.invalid.len());
        let _ = writeln!(out, "Warnings: {}", self.warnings.len());

        if !self.invalid.is_empty() {
            let _ = writeln!(out, "\n=== Invalid Links ===");
            for entry in &self.invalid {
                let _ = writeln!(out, "\n{} ({})", entry.id, entry.name);
                let _ = writeln!(
                    out,
                    "  Homepage: {}",
                    entry.homepage.as_deref().unwrap_or("(none)")
                );
                let _ = writeln!(out, "  Error: {}", entry.github.error().unwrap_or_default());
                if let Some(err) = entry.npm.error() {
                    let _ = writeln!(out, "  npm Error: {err}");
                }
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\n=== Warnings ===");
            for entry in &self.warnings {
                let _ = writeln!(out, "\n{} ({})", entry.id, entry.name);
                let _ = writeln!(out, "  GitHub: OK");
                let _ = writeln!(out, "  npm: {}", entry.npm.error().unwrap_or_default());
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(github: GithubCheck, npm_package: Option<&str>, npm: NpmCheck) -> ReportEntry {
        ReportEntry {
            id: "x".into(),
            name: "X".into(),
            homepage: Some("https://github.com/o/r".into()),
            github,
            npm_package: npm_package.map(String::from),
            npm,
        }
    }

    fn valid_gh() -> GithubCheck {
        GithubCheck::Valid {
            repo: "o/r".into(),
            full_name: None,
        }
    }

    #[test]
    fn test_outcome_classification() {
        let bad_gh = GithubCheck::Invalid {
            error: "HTTP 500".into(),
        };
        let missing = NpmCheck::Invalid {
            error: "Package not found on npm".into(),
        };
        assert_eq!(
            entry(bad_gh, Some("@a/b"), NpmCheck::Valid).outcome(),
            Outcome::Invalid
        );
        assert_eq!(
            entry(valid_gh(), Some("@a/b"), missing).outcome(),
            Outcome::Warning
        );
        assert_eq!(
            entry(valid_gh(), Some("@a/b"), NpmCheck::Skipped).outcome(),
            Outcome::Valid
        );
        assert_eq!(
            entry(valid_gh(), None, NpmCheck::Skipped).outcome(),
            Outcome::Valid
        );
    }

    #[test]
    fn test_push_lands_in_one_bucket() {
        let mut report = Report::default();
        report.push(entry(valid_gh(), None, NpmCheck::Skipped));
        assert_eq!(report.checked(), 1);
        assert_eq!(report.valid.len(), 1);
        assert!(report.summary().starts_with("=== Summary ===\nValid: 1\n"));
    }
}
