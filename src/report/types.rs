//! Normalized linter error record and the parser trait.

use crate::error::Result;
use std::fmt;

/// One diagnostic from one linter at one location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinterError {
    /// Project-relative file path (forward slashes).
    pub file_path: String,
    /// Line number in the file (1-based).
    pub line: usize,
    /// Machine-readable code, e.g. `E501` or `arg-type`.
    pub code: String,
    pub message: String,
    /// Name of the linter that reported it.
    pub source_name: String,
    /// Severity as reported by the linter, if it reports one.
    pub severity: Option<String>,
}

impl LinterError {
    /// Create a linter error without a severity.
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        code: impl Into<String>,
        message: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            code: code.into(),
            message: message.into(),
            source_name: source_name.into(),
            severity: None,
        }
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }
}

impl fmt::Display for LinterError {
    /// ```text
    /// mypy app.py: 12 error arg-type
    /// Incompatible type
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.source_name, self.file_path, self.line)?;
        if let Some(severity) = &self.severity {
            write!(f, " {}", severity)?;
        }
        write!(f, " {}\n{}", self.code, self.message)
    }
}

/// A source of linter errors in one report format.
///
/// The correlation engine drives every format through this trait; new
/// formats are added as new implementations.
pub trait ReportParser {
    /// Name used in logs and as `source_name` on produced errors.
    fn name(&self) -> &str;

    /// Produce every diagnostic in the report.
    ///
    /// Fails as a whole if the report cannot be read or has the wrong shape.
    fn parse(&self) -> Result<Vec<LinterError>>;
}
