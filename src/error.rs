//! Error types for the changelint CLI.
//!
//! Uses thiserror for derive macros. Findings on changed lines are not errors;
//! these variants cover the conditions that abort a run before a verdict exists.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for changelint operations.
#[derive(Error, Debug)]
pub enum ChangelintError {
    /// Invalid configuration: missing or non-file report path, bad config
    /// file, or a pattern that does not compile.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A structured report could not be parsed into its expected shape.
    #[error("Malformed report: {0}")]
    MalformedReport(String),

    /// An external analysis tool could not be executed.
    #[error("Tool execution failed: {0}")]
    ToolError(String),
}

impl ChangelintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChangelintError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            ChangelintError::MalformedReport(_) => exit_codes::MALFORMED_REPORT,
            ChangelintError::ToolError(_) => exit_codes::TOOL_FAILURE,
        }
    }
}

/// Result type alias for changelint operations.
pub type Result<T> = std::result::Result<T, ChangelintError>;
