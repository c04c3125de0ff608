//! Changelint core library.
//!
//! Filters static-analysis findings down to the lines touched by a change,
//! so a CI gate fails only on newly introduced issues.
//!
//! High-level modules:
//! - `diff`: changed-line intervals from unified diff text.
//! - `report`: Ruff and mypy normalizers behind the `ReportParser` trait.
//! - `check`: correlation of errors with intervals and the verdict.
//! - `config` / `context`: YAML configuration and project root resolution.
//! - `tool`: subprocess runner for linters that print diagnostics.

pub mod check;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod report;
pub mod tool;

#[cfg(test)]
pub(crate) mod test_support;
