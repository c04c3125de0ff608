//! Verdict of a correlation run.

use crate::exit_codes;
use crate::report::LinterError;

/// Errors found on changed lines across all linters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    found: Vec<LinterError>,
}

impl CheckOutcome {
    pub fn new(found: Vec<LinterError>) -> Self {
        Self { found }
    }

    /// True when no error falls on a changed line.
    pub fn is_clean(&self) -> bool {
        self.found.is_empty()
    }

    pub fn errors(&self) -> &[LinterError] {
        &self.found
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FINDINGS
        }
    }

    /// Lines of the user-facing failure report, empty when clean.
    ///
    /// ```text
    /// ❌ Linter errors:
    /// - mypy app.py: 12 error arg-type
    /// Incompatible type
    /// ❌ Linter check is failed!
    /// ```
    pub fn report_lines(&self) -> Vec<String> {
        if self.is_clean() {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.found.len() + 2);
        lines.push("❌ Linter errors:".to_string());
        lines.extend(self.found.iter().map(|error| format!("- {}", error)));
        lines.push("❌ Linter check is failed!".to_string());
        lines
    }
}
