//! mypy diagnostic normalizer.
//!
//! mypy has no report file: it is run as a subprocess and each stdout line
//! of the form `<file>:<line>: <severity> <message> [<code>]` becomes a
//! [`LinterError`]. Everything else it prints (summary lines, blank lines,
//! notes without a location) is dropped.

use crate::config::Config;
use crate::diff::relative_to_root;
use crate::error::{ChangelintError, Result};
use crate::tool::ToolCommand;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use super::types::{LinterError, ReportParser};

/// `source_name` of errors produced from mypy output.
pub const MYPY_SOURCE_NAME: &str = "mypy";

/// Code used when a diagnostic line carries no `[code]` suffix.
pub const DEFAULT_MYPY_CODE: &str = "mypy";

/// Named groups a diagnostic grammar must define.
const REQUIRED_GROUPS: [&str; 5] = ["file", "line", "severity", "message", "code"];

/// Compile a diagnostic line grammar and check its named groups.
pub fn compile_diagnostic_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| {
        ChangelintError::ConfigError(format!(
            "invalid regex in diagnostic_pattern: '{}' - {}",
            pattern, e
        ))
    })?;

    let names: Vec<&str> = regex.capture_names().flatten().collect();
    let missing: Vec<&str> = REQUIRED_GROUPS
        .iter()
        .copied()
        .filter(|group| !names.contains(group))
        .collect();

    if !missing.is_empty() {
        return Err(ChangelintError::ConfigError(format!(
            "diagnostic_pattern is missing named groups: {}",
            missing.join(", ")
        )));
    }

    Ok(regex)
}

/// Runs mypy and parses its diagnostics.
#[derive(Debug, Clone)]
pub struct MypyReportParser {
    command: ToolCommand,
    pattern: Regex,
    root: PathBuf,
}

impl MypyReportParser {
    /// Create a parser that runs `command` in `root`.
    pub fn new(command: ToolCommand, diagnostic_pattern: &str, root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            command,
            pattern: compile_diagnostic_pattern(diagnostic_pattern)?,
            root: root.into(),
        })
    }

    /// Create a parser from the configured command and grammar.
    pub fn from_config(config: &Config, root: &Path) -> Result<Self> {
        Self::new(
            config.mypy_command_for(root)?,
            &config.diagnostic_pattern,
            root,
        )
    }

    pub fn command(&self) -> &ToolCommand {
        &self.command
    }
}

impl ReportParser for MypyReportParser {
    fn name(&self) -> &str {
        MYPY_SOURCE_NAME
    }

    fn parse(&self) -> Result<Vec<LinterError>> {
        let output = self.command.run(&self.root)?;
        if is_fatal_exit(output.exit_code) {
            warn!(
                command = %self.command,
                exit_code = ?output.exit_code,
                stderr = %output.stderr.trim(),
                "mypy did not complete its check; its diagnostics may be missing"
            );
        }
        if !output.stderr.trim().is_empty() {
            debug!(stderr = %output.stderr.trim(), "mypy wrote to stderr");
        }

        let errors = parse_diagnostics(&output.stdout, &self.pattern, &self.root);
        debug!(errors = errors.len(), "mypy output parsed");
        Ok(errors)
    }
}

/// mypy exits 0 when clean and 1 when it reports errors; anything else
/// (including death by signal) means it stopped before checking.
fn is_fatal_exit(exit_code: Option<i32>) -> bool {
    !matches!(exit_code, Some(0 | 1))
}

/// Parse diagnostic lines from tool output.
///
/// Lines that do not match `pattern` are skipped. The code defaults to
/// [`DEFAULT_MYPY_CODE`] when the optional `code` group does not participate.
pub fn parse_diagnostics(output: &str, pattern: &Regex, root: &Path) -> Vec<LinterError> {
    output
        .lines()
        .filter_map(|line| {
            let parsed = parse_diagnostic_line(line, pattern, root);
            if parsed.is_none() && !line.trim().is_empty() {
                trace!(line = %line, "not a diagnostic line");
            }
            parsed
        })
        .collect()
}

fn parse_diagnostic_line(line: &str, pattern: &Regex, root: &Path) -> Option<LinterError> {
    let caps = pattern.captures(line)?;

    let file = caps.name("file")?.as_str();
    let line_number: usize = caps.name("line")?.as_str().parse().ok()?;
    let severity = caps.name("severity")?.as_str();
    let message = caps.name("message")?.as_str().trim();
    let code = caps
        .name("code")
        .map_or(DEFAULT_MYPY_CODE, |code| code.as_str());

    // Paths outside the root cannot match a diff key; keep them as printed.
    let file_path = relative_to_root(file, root).unwrap_or_else(|| file.to_string());

    Some(
        LinterError::new(file_path, line_number, code, message, MYPY_SOURCE_NAME)
            .with_severity(severity),
    )
}
