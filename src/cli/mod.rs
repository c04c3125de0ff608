//! CLI argument parsing for changelint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Changelint: report linter findings only on lines touched by the current diff.
///
/// Reads a unified diff, collects diagnostics from Ruff (JSON report) and
/// mypy (run as a subprocess), and fails only if a diagnostic lands on a
/// changed line.
#[derive(Parser, Debug)]
#[command(name = "changelint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: changelint.yaml in the project root, if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for changelint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Correlate linter findings with the current diff.
    ///
    /// Exits 0 when no finding lands on a changed line and 1 when at least
    /// one does. Configuration and report errors use their own exit codes.
    Check(CheckArgs),

    /// Print the changed-line intervals parsed from the diff.
    Changes(ChangesArgs),
}

/// Project location and diff input, shared by all commands.
#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    /// Project root that report paths are relative to (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Unified diff file (overrides `diff_path` from config).
    #[arg(long)]
    pub diff: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Ruff JSON report (overrides `ruff_report_path` from config).
    #[arg(long)]
    pub ruff_report: Option<PathBuf>,

    /// Linters to run, in order (overrides `linters` from config).
    #[arg(long = "linter", value_delimiter = ',')]
    pub linters: Vec<String>,
}

/// Arguments for the `changes` command.
#[derive(Args, Debug, Default)]
pub struct ChangesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
