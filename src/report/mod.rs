//! Linter report normalizers.
//!
//! Each supported linter has a [`ReportParser`] that turns its native output
//! into [`LinterError`] records with root-relative paths:
//! - Ruff: JSON report file (array of diagnostic objects)
//! - mypy: text diagnostics captured from a subprocess
//!
//! Error handling:
//! - A missing or non-file report path is a config error (exit 2)
//! - A report that does not have the expected shape is a malformed report (exit 3)
//! - Diagnostic lines that do not match the grammar are dropped

mod mypy;
mod ruff;
mod types;

// Re-export public API
pub use mypy::{
    DEFAULT_MYPY_CODE, MYPY_SOURCE_NAME, MypyReportParser, compile_diagnostic_pattern,
    parse_diagnostics,
};
pub use ruff::{RUFF_SOURCE_NAME, RuffReportParser, SYNTAX_ERROR_CODE, parse_ruff_report};
pub use types::{LinterError, ReportParser};

use crate::config::{Config, LinterKind};
use crate::error::Result;
use std::path::Path;

/// Build the parser for one configured linter.
///
/// Construction validates inputs up front, so a missing Ruff report fails
/// here, before any diff or report is parsed.
pub fn parser_for(kind: LinterKind, config: &Config, root: &Path) -> Result<Box<dyn ReportParser>> {
    let parser: Box<dyn ReportParser> = match kind {
        LinterKind::Ruff => Box::new(RuffReportParser::new(
            config.ruff_report_path_in(root),
            root,
        )?),
        LinterKind::Mypy => Box::new(MypyReportParser::from_config(config, root)?),
    };
    Ok(parser)
}
