//! Tests for config functionality.

use crate::config::types::{DEFAULT_DIAGNOSTIC_PATTERN, DEFAULT_HUNK_HEADER_PATTERN};
use crate::config::{Config, DEFAULT_CONFIG_FILE, LinterKind};
use crate::error::ChangelintError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.diff_path, "linter/current_diff.txt");
    assert_eq!(config.ruff_report_path, "linter/ruff-report.json");
    assert_eq!(config.mypy_command, "mypy --strict --show-error-codes");
    assert_eq!(config.linters, vec![LinterKind::Ruff, LinterKind::Mypy]);
    assert_eq!(config.hunk_header_pattern, DEFAULT_HUNK_HEADER_PATTERN);
    assert_eq!(config.diagnostic_pattern, DEFAULT_DIAGNOSTIC_PATTERN);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.diff_path, "linter/current_diff.txt");
    assert_eq!(config.linters.len(), 2);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
diff_path: build/change.diff
linters:
  - mypy
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.diff_path, "build/change.diff");
    assert_eq!(config.linters, vec![LinterKind::Mypy]);

    // Unspecified values should use defaults
    assert_eq!(config.ruff_report_path, "linter/ruff-report.json");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
future_option: true
mypy_command: "python -m mypy --strict"
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.mypy_command, "python -m mypy --strict");
}

#[test]
fn test_empty_linters_rejected() {
    let err = Config::from_yaml("linters: []").unwrap_err();
    assert!(matches!(err, ChangelintError::ConfigError(_)));
    assert!(err.to_string().contains("at least one linter"));
}

#[test]
fn test_duplicate_linters_rejected() {
    let err = Config::from_yaml("linters: [ruff, mypy, ruff]").unwrap_err();
    assert!(err.to_string().contains("'ruff' is listed more than once"));
}

#[test]
fn test_unknown_linter_rejected() {
    let err = Config::from_yaml("linters: [pylint]").unwrap_err();
    assert!(matches!(err, ChangelintError::ConfigError(_)));
}

#[test]
fn test_invalid_hunk_pattern_rejected() {
    let err = Config::from_yaml(r#"hunk_header_pattern: "^@@ (""#).unwrap_err();
    assert!(matches!(err, ChangelintError::ConfigError(_)));
}

#[test]
fn test_diagnostic_pattern_missing_group_rejected() {
    let yaml = r#"diagnostic_pattern: '^(?P<file>.+):(?P<line>\d+): (?P<message>.+)$'"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("severity"));
}

#[test]
fn test_empty_mypy_command_rejected() {
    let err = Config::from_yaml(r#"mypy_command: "  ""#).unwrap_err();
    assert!(matches!(err, ChangelintError::ConfigError(_)));
}

#[test]
fn test_yaml_roundtrip_preserves_linters() {
    let config = Config {
        linters: vec![LinterKind::Mypy, LinterKind::Ruff],
        ..Default::default()
    };
    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.linters, vec![LinterKind::Mypy, LinterKind::Ruff]);
}

#[test]
fn test_resolve_uses_defaults_without_config_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::resolve(temp.path(), None).unwrap();
    assert_eq!(config.diff_path, "linter/current_diff.txt");
}

#[test]
fn test_resolve_reads_config_file_from_root() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(DEFAULT_CONFIG_FILE),
        "ruff_report_path: reports/ruff.json\n",
    )
    .unwrap();

    let config = Config::resolve(temp.path(), None).unwrap();
    assert_eq!(config.ruff_report_path, "reports/ruff.json");
}

#[test]
fn test_resolve_missing_explicit_config_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yaml");

    let err = Config::resolve(temp.path(), Some(&missing)).unwrap_err();
    assert!(matches!(err, ChangelintError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_paths_resolve_against_root() {
    let config = Config::default();
    let root = Path::new("/work/project");

    assert_eq!(
        config.diff_path_in(root),
        Path::new("/work/project/linter/current_diff.txt")
    );
    assert_eq!(
        config.ruff_report_path_in(root),
        Path::new("/work/project/linter/ruff-report.json")
    );
}

#[test]
fn test_mypy_command_appends_root() {
    let config = Config::default();
    let command = config.mypy_command_for(Path::new("/work/project")).unwrap();

    assert_eq!(command.program(), "mypy");
    assert_eq!(
        command.args(),
        ["--strict", "--show-error-codes", "/work/project"]
    );
}

#[test]
fn test_linter_kind_from_str() {
    assert_eq!(LinterKind::from_str("ruff"), Some(LinterKind::Ruff));
    assert_eq!(LinterKind::from_str(" MyPy "), Some(LinterKind::Mypy));
    assert_eq!(LinterKind::from_str("flake8"), None);
    assert_eq!(LinterKind::Mypy.to_string(), "mypy");
}
