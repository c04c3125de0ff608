//! Interval and per-file change types.

use std::collections::HashMap;
use std::fmt;

/// One contiguous run of lines on the new side of a hunk (1-based).
///
/// Stored as a start line and a line count so that zero-length hunks
/// (pure deletions, `+N,0`) are representable: they never contain any line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangedInterval {
    start_line: usize,
    line_count: usize,
}

impl ChangedInterval {
    /// Interval covering `start_line..=end_line`.
    ///
    /// An `end_line` below `start_line` yields an empty interval.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            line_count: end_line
                .checked_sub(start_line)
                .map_or(0, |span| span.saturating_add(1)),
        }
    }

    /// Interval from hunk header values `+start,count`.
    pub fn from_hunk(start_line: usize, line_count: usize) -> Self {
        Self {
            start_line,
            line_count,
        }
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Last line of the interval, or `None` for an empty interval.
    pub fn end_line(&self) -> Option<usize> {
        self.line_count
            .checked_sub(1)
            .map(|span| self.start_line.saturating_add(span))
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// `start_line <= line <= end_line`.
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start_line && line - self.start_line < self.line_count
    }
}

impl fmt::Display for ChangedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_line() {
            Some(end) => write!(f, "{}-{}", self.start_line, end),
            None => write!(f, "{} (empty)", self.start_line),
        }
    }
}

/// Changed intervals per file, in the order files appear in the diff.
///
/// Intervals for one file keep hunk order; they are never merged or sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChanges {
    entries: Vec<(String, Vec<ChangedInterval>)>,
    index: HashMap<String, usize>,
}

impl FileChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with no intervals yet. No-op if already present.
    pub fn add_file(&mut self, path: &str) {
        self.slot(path);
    }

    /// Append an interval to a file, registering the file if needed.
    pub fn push(&mut self, path: &str, interval: ChangedInterval) {
        let slot = self.slot(path);
        self.entries[slot].1.push(interval);
    }

    /// Intervals recorded for `path`, or `None` if the file is not in the diff.
    pub fn get(&self, path: &str) -> Option<&[ChangedInterval]> {
        self.index
            .get(path)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// True if any interval of `path` contains `line`.
    pub fn contains_line(&self, path: &str, line: usize) -> bool {
        self.get(path)
            .is_some_and(|intervals| intervals.iter().any(|i| i.contains(line)))
    }

    /// Files and their intervals in diff order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ChangedInterval])> {
        self.entries
            .iter()
            .map(|(path, intervals)| (path.as_str(), intervals.as_slice()))
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of intervals across all files.
    pub fn interval_count(&self) -> usize {
        self.entries.iter().map(|(_, intervals)| intervals.len()).sum()
    }

    fn slot(&mut self, path: &str) -> usize {
        if let Some(&slot) = self.index.get(path) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((path.to_string(), Vec::new()));
        self.index.insert(path.to_string(), slot);
        slot
    }
}
