//! Configuration types and defaults for changelint.
//!
//! This module defines the linter enum, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Config file looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "changelint.yaml";

/// Grammar for unified diff hunk headers.
///
/// Group 1 is the new-file start line, group 2 the optional new-file count.
pub const DEFAULT_HUNK_HEADER_PATTERN: &str = r"^@@ -\d+(?:,\d+)? \+(\d+)(?:,(\d+))? @@";

/// Grammar for mypy diagnostic lines.
///
/// The colon after the severity is optional so both `file:1: error: msg`
/// and `file:1: error msg` are recognized.
pub const DEFAULT_DIAGNOSTIC_PATTERN: &str =
    r"^(?P<file>.+?):(?P<line>\d+): (?P<severity>error|note):? (?P<message>.+?)( \[(?P<code>.+?)\])?$";

/// A linter whose findings can be correlated with the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinterKind {
    /// Ruff, read from its JSON report file.
    Ruff,
    /// mypy, invoked as a subprocess and parsed line by line.
    Mypy,
}

impl LinterKind {
    /// Parse a linter name from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ruff" => Some(Self::Ruff),
            "mypy" => Some(Self::Mypy),
            _ => None,
        }
    }

    /// The name used in config files, CLI flags and rendered findings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ruff => "ruff",
            Self::Mypy => "mypy",
        }
    }
}

impl fmt::Display for LinterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn default_diff_path() -> String {
    "linter/current_diff.txt".to_string()
}

pub fn default_ruff_report_path() -> String {
    "linter/ruff-report.json".to_string()
}

pub fn default_mypy_command() -> String {
    "mypy --strict --show-error-codes".to_string()
}

pub fn default_linters() -> Vec<LinterKind> {
    vec![LinterKind::Ruff, LinterKind::Mypy]
}

pub fn default_hunk_header_pattern() -> String {
    DEFAULT_HUNK_HEADER_PATTERN.to_string()
}

pub fn default_diagnostic_pattern() -> String {
    DEFAULT_DIAGNOSTIC_PATTERN.to_string()
}
