//! Command implementations for changelint.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod changes;
mod check;

use crate::cli::{Cli, Command};
use changelint::context::{ProjectContext, absolutize};
use changelint::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code for runs that completed; fatal errors are
/// returned as `Err` and mapped to their own exit codes by the caller.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Check(args) => check::cmd_check(args, config_path),
        Command::Changes(args) => changes::cmd_changes(args, config_path),
    }
}

/// Resolve the project context and apply the `--diff` override.
fn resolve_project(
    root: Option<&Path>,
    diff: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<ProjectContext> {
    let config_path = config_path.map(absolutize).transpose()?;
    let mut ctx = ProjectContext::resolve(root, config_path.as_deref())?;

    if let Some(diff) = diff {
        ctx.config.diff_path = absolutize(diff)?.to_string_lossy().into_owned();
    }

    Ok(ctx)
}
