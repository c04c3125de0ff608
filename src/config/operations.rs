//! Config loading, validation, and path resolution.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::diff::compile_hunk_pattern;
use crate::error::{ChangelintError, Result};
use crate::report::compile_diagnostic_pattern;
use crate::tool::ToolCommand;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ChangelintError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ChangelintError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a project.
    ///
    /// An explicit path must exist. Without one, `changelint.yaml` in the
    /// project root is used when present and defaults otherwise.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = root.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ChangelintError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ChangelintError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `linters` must be non-empty and free of duplicates
    /// - `mypy_command` must split into at least a program name
    /// - both grammars must compile and expose the groups their parsers read
    pub fn validate(&self) -> Result<()> {
        if self.linters.is_empty() {
            return Err(ChangelintError::ConfigError(
                "config validation failed: linters must list at least one linter".to_string(),
            ));
        }

        for (i, linter) in self.linters.iter().enumerate() {
            if self.linters[..i].contains(linter) {
                return Err(ChangelintError::ConfigError(format!(
                    "config validation failed: linter '{}' is listed more than once",
                    linter
                )));
            }
        }

        ToolCommand::from_command_line(&self.mypy_command)?;
        compile_hunk_pattern(&self.hunk_header_pattern)?;
        compile_diagnostic_pattern(&self.diagnostic_pattern)?;

        Ok(())
    }

    /// Absolute path of the diff file for a project root.
    pub fn diff_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.diff_path)
    }

    /// Absolute path of the Ruff report for a project root.
    pub fn ruff_report_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.ruff_report_path)
    }

    /// The mypy invocation for a project root: configured command plus the root as target.
    pub fn mypy_command_for(&self, root: &Path) -> Result<ToolCommand> {
        let command = ToolCommand::from_command_line(&self.mypy_command)?;
        Ok(command.with_arg(root.to_string_lossy()))
    }
}
