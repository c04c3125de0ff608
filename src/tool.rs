//! External analysis tool runner.
//!
//! Wraps a configured command line and runs it with captured stdout/stderr.
//! A non-zero exit status is not an error (mypy exits 1 when it reports
//! diagnostics); only failing to spawn the process is.

use crate::error::{ChangelintError, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// A program plus its arguments, parsed from a configured command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

/// Captured output of a completed tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8.
    pub stderr: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ToolOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }
}

impl ToolCommand {
    /// Create a command from a program name and arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a shell-style command line into program and arguments.
    ///
    /// # Returns
    ///
    /// * `Ok(ToolCommand)` - The parsed command
    /// * `Err(ChangelintError::ConfigError)` - Unbalanced quotes or empty command
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut parts = shell_words::split(command_line.trim()).map_err(|e| {
            ChangelintError::ConfigError(format!(
                "failed to parse command '{}': {}\nFix: check for unmatched quotes or invalid escape sequences.",
                command_line, e
            ))
        })?;

        if parts.is_empty() {
            return Err(ChangelintError::ConfigError(
                "tool command is empty".to_string(),
            ));
        }

        let program = parts.remove(0);
        Ok(Self::new(program, parts))
    }

    /// Return the command with one more trailing argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the command to completion in `cwd` and capture its output.
    ///
    /// # Returns
    ///
    /// * `Ok(ToolOutput)` - The process ran, whatever its exit status
    /// * `Err(ChangelintError::ToolError)` - The process could not be spawned
    pub fn run<P: AsRef<Path>>(&self, cwd: P) -> Result<ToolOutput> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd.as_ref())
            .output()
            .map_err(|e| {
                ChangelintError::ToolError(format!(
                    "failed to execute {}: {}\nFix: ensure the command is installed and in PATH.",
                    self, e
                ))
            })?;

        let tool_output = ToolOutput::from_output(&output);
        debug!(
            command = %self,
            exit_code = ?tool_output.exit_code,
            stdout_bytes = tool_output.stdout.len(),
            "tool finished"
        );

        Ok(tool_output)
    }
}

impl std::fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.args.iter().map(String::as_str));
        f.write_str(&shell_words::join(words))
    }
}
