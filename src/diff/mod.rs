//! Changed-line extraction from unified diffs.
//!
//! This module turns the text of a unified diff into [`FileChanges`]: for each
//! file on the new side of the diff, the ordered list of line intervals its
//! hunks cover. Only `+++ b/` headers and `@@` hunk headers are read; the
//! `+`/`-`/context lines inside a hunk are not inspected.

mod helpers;
mod model;
mod parser;


// Re-export public API
pub use helpers::{normalize_path, relative_to_root};
pub use model::{ChangedInterval, FileChanges};
pub use parser::{DiffParser, compile_hunk_pattern};
