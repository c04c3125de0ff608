//! Core diff parsing logic.

use crate::config::Config;
use crate::error::{ChangelintError, Result};
use regex::Regex;
use std::path::Path;
use tracing::{debug, trace};

use super::helpers::normalize_path;
use super::model::{ChangedInterval, FileChanges};

/// Prefix of the new-file header line.
const NEW_FILE_PREFIX: &str = "+++ b/";

/// Prefix of a hunk header line.
const HUNK_PREFIX: &str = "@@";

/// Compile a hunk header grammar.
///
/// Group 1 must capture the new-file start line and group 2 the optional
/// new-file line count.
pub fn compile_hunk_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| {
        ChangelintError::ConfigError(format!(
            "invalid regex in hunk_header_pattern: '{}' - {}",
            pattern, e
        ))
    })?;

    // captures_len counts the implicit whole-match group
    if regex.captures_len() < 3 {
        return Err(ChangelintError::ConfigError(format!(
            "hunk_header_pattern must have two capture groups (new start, new count): '{}'",
            pattern
        )));
    }

    Ok(regex)
}

/// Extracts [`FileChanges`] from unified diff text.
#[derive(Debug, Clone)]
pub struct DiffParser {
    hunk_header: Regex,
}

impl DiffParser {
    /// Create a parser for the given hunk header grammar.
    pub fn new(hunk_header_pattern: &str) -> Result<Self> {
        Ok(Self {
            hunk_header: compile_hunk_pattern(hunk_header_pattern)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.hunk_header_pattern)
    }

    /// Read and parse a diff file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileChanges)` - Changed intervals per file
    /// * `Err(ChangelintError::ConfigError)` - The diff file could not be read
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<FileChanges> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChangelintError::ConfigError(format!(
                "failed to read diff file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let changes = self.parse(&content);
        debug!(
            files = changes.len(),
            intervals = changes.interval_count(),
            "diff parsed"
        );
        Ok(changes)
    }

    /// Parse diff text into changed intervals per file.
    ///
    /// Never fails: hunk headers that do not match the grammar, or that appear
    /// before any `+++ b/` line, are skipped.
    pub fn parse(&self, diff_text: &str) -> FileChanges {
        let mut changes = FileChanges::new();
        let mut current_file: Option<String> = None;

        for line in diff_text.lines() {
            if let Some(rest) = line.strip_prefix(NEW_FILE_PREFIX) {
                let path = normalize_path(rest.trim());
                changes.add_file(&path);
                current_file = Some(path);
            } else if line.starts_with(HUNK_PREFIX) {
                let Some(file) = &current_file else {
                    trace!(line = %line, "hunk header before any file header");
                    continue;
                };
                match self.parse_hunk_header(line) {
                    Some(interval) => changes.push(file, interval),
                    None => trace!(line = %line, "unrecognized hunk header"),
                }
            }
        }

        changes
    }

    /// Parse a hunk header into the new-side interval.
    ///
    /// `@@ -a[,b] +c[,d] @@` yields `[c, c+d-1]`, with `d` defaulting to 1.
    /// Headers whose interval runs past `usize::MAX` are not recognized.
    pub fn parse_hunk_header(&self, line: &str) -> Option<ChangedInterval> {
        let caps = self.hunk_header.captures(line)?;
        let start: usize = caps.get(1)?.as_str().parse().ok()?;
        let count: usize = match caps.get(2) {
            Some(count) => count.as_str().parse().ok()?,
            None => 1,
        };
        start.checked_add(count)?;
        Some(ChangedInterval::from_hunk(start, count))
    }
}
