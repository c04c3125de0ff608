//! Project context resolution for changelint.
//!
//! Resolves the project root (the directory report paths are relative to)
//! and loads the configuration for it. All paths in the context are absolute.

use crate::config::Config;
use crate::error::{ChangelintError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved project root plus its configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Canonical absolute path of the project root.
    pub root: PathBuf,

    /// Configuration loaded for this project.
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the context from an optional root and config path.
    ///
    /// Without a root the current working directory is used.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectContext)` - Successfully resolved context
    /// * `Err(ChangelintError::ConfigError)` - Root not accessible or config invalid
    pub fn resolve(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => current_dir()?,
        };

        let root = root.canonicalize().map_err(|e| {
            ChangelintError::ConfigError(format!(
                "project root '{}' is not accessible: {}",
                root.display(),
                e
            ))
        })?;

        if !root.is_dir() {
            return Err(ChangelintError::ConfigError(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }

        let config = Config::resolve(&root, config_path)?;
        Ok(Self { root, config })
    }

    /// Absolute path of the diff file.
    pub fn diff_path(&self) -> PathBuf {
        self.config.diff_path_in(&self.root)
    }

    /// Absolute path of the Ruff report.
    pub fn ruff_report_path(&self) -> PathBuf {
        self.config.ruff_report_path_in(&self.root)
    }
}

/// Make a command-line path absolute against the current working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(current_dir()?.join(path))
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        ChangelintError::ConfigError(format!("failed to get current working directory: {}", e))
    })
}
