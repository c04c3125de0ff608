//! Ruff JSON report normalizer.

use crate::diff::relative_to_root;
use crate::error::{ChangelintError, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::{LinterError, ReportParser};

/// `source_name` of errors produced from Ruff reports.
pub const RUFF_SOURCE_NAME: &str = "ruff";

/// Code used when Ruff reports `"code": null` (syntax errors).
pub const SYNTAX_ERROR_CODE: &str = "syntax-error";

#[derive(Debug, Deserialize)]
struct RuffDiagnostic {
    filename: String,
    location: RuffLocation,
    // Required but nullable: a missing key is an error, `null` is not.
    #[serde(deserialize_with = "nullable_string")]
    code: Option<String>,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RuffLocation {
    row: usize,
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Parses the JSON report written by `ruff check --output-format json`.
#[derive(Debug, Clone)]
pub struct RuffReportParser {
    report_path: PathBuf,
    root: PathBuf,
}

impl RuffReportParser {
    /// Create a parser for the report at `report_path`.
    ///
    /// # Returns
    ///
    /// * `Ok(RuffReportParser)` - The report exists and is a regular file
    /// * `Err(ChangelintError::ConfigError)` - The path is missing or not a file
    pub fn new(report_path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Result<Self> {
        let report_path = report_path.into();

        if !report_path.exists() {
            return Err(ChangelintError::ConfigError(format!(
                "report file not found: {}",
                report_path.display()
            )));
        }

        if !report_path.is_file() {
            return Err(ChangelintError::ConfigError(format!(
                "report path is not a regular file: {}",
                report_path.display()
            )));
        }

        Ok(Self {
            report_path,
            root: root.into(),
        })
    }
}

impl ReportParser for RuffReportParser {
    fn name(&self) -> &str {
        RUFF_SOURCE_NAME
    }

    fn parse(&self) -> Result<Vec<LinterError>> {
        let content = std::fs::read_to_string(&self.report_path).map_err(|e| {
            ChangelintError::ConfigError(format!(
                "failed to read report file '{}': {}",
                self.report_path.display(),
                e
            ))
        })?;

        let errors = parse_ruff_report(&content, &self.root).map_err(|e| match e {
            ChangelintError::MalformedReport(msg) => ChangelintError::MalformedReport(format!(
                "{}: {}",
                self.report_path.display(),
                msg
            )),
            other => other,
        })?;

        debug!(
            report = %self.report_path.display(),
            errors = errors.len(),
            "ruff report parsed"
        );
        Ok(errors)
    }
}

/// Parse Ruff JSON report text into linter errors.
///
/// The whole document is rejected if it is not an array of objects with
/// `filename`, `location.row`, `code` and `message`, or if any filename lies
/// outside `root`. There are no partial results.
pub fn parse_ruff_report(json: &str, root: &Path) -> Result<Vec<LinterError>> {
    let diagnostics: Vec<RuffDiagnostic> = serde_json::from_str(json)
        .map_err(|e| ChangelintError::MalformedReport(format!("invalid Ruff JSON: {}", e)))?;

    diagnostics
        .into_iter()
        .map(|diagnostic| -> Result<LinterError> {
            let file_path = relative_to_root(&diagnostic.filename, root).ok_or_else(|| {
                ChangelintError::MalformedReport(format!(
                    "file '{}' is not inside project root '{}'",
                    diagnostic.filename,
                    root.display()
                ))
            })?;

            Ok(LinterError::new(
                file_path,
                diagnostic.location.row,
                diagnostic
                    .code
                    .unwrap_or_else(|| SYNTAX_ERROR_CODE.to_string()),
                diagnostic.message,
                RUFF_SOURCE_NAME,
            ))
        })
        .collect()
}
