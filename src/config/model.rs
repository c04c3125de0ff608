//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a changelint run.
///
/// This struct represents the contents of `changelint.yaml`. Relative paths
/// are resolved against the project root. Unknown fields in the YAML are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Inputs
    // =========================================================================
    /// Unified diff of the change under review (default: "linter/current_diff.txt").
    #[serde(default = "default_diff_path")]
    pub diff_path: String,

    /// Ruff JSON report (default: "linter/ruff-report.json").
    #[serde(default = "default_ruff_report_path")]
    pub ruff_report_path: String,

    /// mypy command line. The project root is appended as the last argument.
    #[serde(default = "default_mypy_command")]
    pub mypy_command: String,

    /// Linters to correlate, in invocation order.
    #[serde(default = "default_linters")]
    pub linters: Vec<LinterKind>,

    // =========================================================================
    // Grammars
    // =========================================================================
    /// Regex for hunk headers: group 1 = new start, group 2 = new count.
    #[serde(default = "default_hunk_header_pattern")]
    pub hunk_header_pattern: String,

    /// Regex for diagnostic lines with named groups
    /// `file`, `line`, `severity`, `message` and `code`.
    #[serde(default = "default_diagnostic_pattern")]
    pub diagnostic_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_path: default_diff_path(),
            ruff_report_path: default_ruff_report_path(),
            mypy_command: default_mypy_command(),
            linters: default_linters(),
            hunk_header_pattern: default_hunk_header_pattern(),
            diagnostic_pattern: default_diagnostic_pattern(),
        }
    }
}
