//! Configuration model for changelint.
//!
//! This module defines the Config struct that represents `changelint.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of the configured patterns.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, LinterKind};
