//! Exit code constants for the changelint CLI.
//!
//! - 0: Clean (no findings on changed lines)
//! - 1: Findings on changed lines
//! - 2: Configuration error (bad config, missing report, invalid pattern)
//! - 3: Malformed report document
//! - 4: External analysis tool could not be run

/// Successful execution, no findings on changed lines.
pub const SUCCESS: i32 = 0;

/// At least one linter error falls on a changed line.
pub const FINDINGS: i32 = 1;

/// Configuration error: unreadable config, missing report file, invalid regex.
pub const CONFIG_ERROR: i32 = 2;

/// Report document is not valid JSON or does not have the expected shape.
pub const MALFORMED_REPORT: i32 = 3;

/// External analysis tool could not be spawned.
pub const TOOL_FAILURE: i32 = 4;
