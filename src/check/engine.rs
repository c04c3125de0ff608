//! Core correlation logic.

use crate::diff::FileChanges;
use crate::error::Result;
use crate::report::{LinterError, ReportParser};
use std::collections::HashMap;
use tracing::{debug, info};

use super::outcome::CheckOutcome;

/// Errors from one linter that fall on changed lines.
///
/// Output order: files in diff order, then each file's errors in their
/// original relative order. Neither input is modified.
pub fn affected_errors(changes: &FileChanges, errors: &[LinterError]) -> Vec<LinterError> {
    let mut errors_by_file: HashMap<&str, Vec<&LinterError>> = HashMap::new();
    for error in errors {
        errors_by_file
            .entry(error.file_path.as_str())
            .or_default()
            .push(error);
    }

    let mut affected = Vec::new();
    for (file_path, intervals) in changes.iter() {
        let Some(file_errors) = errors_by_file.get(file_path) else {
            continue;
        };
        for error in file_errors {
            if intervals.iter().any(|interval| interval.contains(error.line)) {
                affected.push((*error).clone());
            }
        }
    }

    affected
}

/// Accumulates errors on changed lines across several linters.
///
/// # Example
///
/// ```
/// use changelint::check::LinterCheck;
/// use changelint::diff::{ChangedInterval, FileChanges};
/// use changelint::report::LinterError;
///
/// let mut changes = FileChanges::new();
/// changes.push("app.py", ChangedInterval::new(10, 14));
///
/// let mut check = LinterCheck::new(&changes);
/// check.check_errors(&[LinterError::new("app.py", 12, "E1", "bad", "ruff")]);
///
/// assert!(!check.finish().is_clean());
/// ```
#[derive(Debug)]
pub struct LinterCheck<'a> {
    changes: &'a FileChanges,
    found: Vec<LinterError>,
}

impl<'a> LinterCheck<'a> {
    pub fn new(changes: &'a FileChanges) -> Self {
        Self {
            changes,
            found: Vec::new(),
        }
    }

    /// Correlate one linter's errors and keep the survivors.
    ///
    /// Returns the number of survivors added.
    pub fn check_errors(&mut self, errors: &[LinterError]) -> usize {
        let affected = affected_errors(self.changes, errors);
        let count = affected.len();
        self.found.extend(affected);
        count
    }

    /// Parse one report and correlate its errors.
    ///
    /// A parser failure aborts the check; nothing from that parser is kept.
    pub fn run_parser(&mut self, parser: &dyn ReportParser) -> Result<usize> {
        info!("+ Linter check {} is started!", parser.name());
        let errors = parser.parse()?;
        let count = self.check_errors(&errors);
        debug!(
            linter = parser.name(),
            reported = errors.len(),
            affected = count,
            "linter correlated"
        );
        Ok(count)
    }

    /// Run every parser in order and return the combined outcome.
    pub fn run(mut self, parsers: &[Box<dyn ReportParser>]) -> Result<CheckOutcome> {
        for parser in parsers {
            self.run_parser(parser.as_ref())?;
        }
        Ok(self.finish())
    }

    /// Survivors accumulated so far.
    pub fn found(&self) -> &[LinterError] {
        &self.found
    }

    pub fn finish(self) -> CheckOutcome {
        CheckOutcome::new(self.found)
    }
}
