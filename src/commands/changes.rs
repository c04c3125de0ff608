//! Implementation of the `changelint changes` command.

use crate::cli::ChangesArgs;
use changelint::diff::{ChangedInterval, DiffParser, FileChanges};
use changelint::error::Result;
use changelint::exit_codes;
use std::path::Path;

use super::resolve_project;

/// Execute the `changelint changes` command.
///
/// Prints one line per file in the diff with its changed intervals.
pub fn cmd_changes(args: ChangesArgs, config_path: Option<&Path>) -> Result<i32> {
    let ctx = resolve_project(
        args.project.root.as_deref(),
        args.project.diff.as_deref(),
        config_path,
    )?;

    let changes = DiffParser::from_config(&ctx.config)?.parse_file(ctx.diff_path())?;
    print!("{}", format_changes(&changes));

    Ok(exit_codes::SUCCESS)
}

fn format_changes(changes: &FileChanges) -> String {
    if changes.is_empty() {
        return "No changed files in diff.\n".to_string();
    }

    let mut out = String::new();
    for (path, intervals) in changes.iter() {
        let rendered = if intervals.is_empty() {
            "(no changed lines)".to_string()
        } else {
            intervals
                .iter()
                .map(ChangedInterval::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!("{}: {}\n", path, rendered));
    }
    out
}
