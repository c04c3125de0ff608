//! Implementation of the `changelint check` command.
//!
//! # Steps
//!
//! 1. Resolve project root and config, apply CLI overrides
//! 2. Build one parser per enabled linter (validates report paths)
//! 3. Parse the diff into changed intervals
//! 4. Run each parser in order and correlate its errors
//! 5. Log the verdict and each finding

use crate::cli::CheckArgs;
use changelint::check::{CheckOutcome, LinterCheck};
use changelint::config::LinterKind;
use changelint::context::absolutize;
use changelint::diff::DiffParser;
use changelint::error::{ChangelintError, Result};
use changelint::report::{ReportParser, parser_for};
use std::path::Path;
use tracing::{error, info};

use super::resolve_project;

/// Execute the `changelint check` command.
///
/// # Exit Codes
///
/// - 0: No linter error on a changed line
/// - 1: At least one linter error on a changed line
/// - 2: Configuration error (missing report, bad config)
/// - 3: Malformed report
/// - 4: Linter could not be run
pub fn cmd_check(args: CheckArgs, config_path: Option<&Path>) -> Result<i32> {
    let mut ctx = resolve_project(
        args.project.root.as_deref(),
        args.project.diff.as_deref(),
        config_path,
    )?;

    if let Some(report) = args.ruff_report.as_deref() {
        ctx.config.ruff_report_path = absolutize(report)?.to_string_lossy().into_owned();
    }

    if !args.linters.is_empty() {
        ctx.config.linters = parse_linters(&args.linters)?;
        ctx.config.validate()?;
    }

    // Parsers validate their inputs on construction, before any parsing starts
    let parsers = ctx
        .config
        .linters
        .iter()
        .map(|&kind| parser_for(kind, &ctx.config, &ctx.root))
        .collect::<Result<Vec<Box<dyn ReportParser>>>>()?;

    info!("- Diff parsing is started!");
    let changes = DiffParser::from_config(&ctx.config)?.parse_file(ctx.diff_path())?;

    let outcome = LinterCheck::new(&changes).run(&parsers)?;
    log_outcome(&outcome);

    Ok(outcome.exit_code())
}

fn parse_linters(names: &[String]) -> Result<Vec<LinterKind>> {
    names
        .iter()
        .map(|name| {
            LinterKind::from_str(name).ok_or_else(|| {
                ChangelintError::ConfigError(format!(
                    "unknown linter '{}'. Supported linters: ruff, mypy",
                    name
                ))
            })
        })
        .collect()
}

fn log_outcome(outcome: &CheckOutcome) {
    if outcome.is_clean() {
        info!("✓ Linter check is passed");
        return;
    }

    for line in outcome.report_lines() {
        error!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProjectArgs;
    use changelint::exit_codes;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const DIFF: &str = r#"diff --git a/app.py b/app.py
index 1111111..2222222 100644
--- a/app.py
+++ b/app.py
@@ -10,3 +10,5 @@ def handler():
+    value = compute()
+    return value
"#;

    struct Project {
        temp: TempDir,
        root: PathBuf,
    }

    impl Project {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let root = temp.path().canonicalize().unwrap();
            std::fs::create_dir_all(root.join("linter")).unwrap();
            std::fs::write(root.join("linter/current_diff.txt"), DIFF).unwrap();
            Self { temp, root }
        }

        fn write_ruff_report(&self, rows: &[usize]) {
            let entries: Vec<serde_json::Value> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "code": "E501",
                        "filename": self.root.join("app.py").to_string_lossy(),
                        "location": {"row": row, "column": 1},
                        "message": "Line too long"
                    })
                })
                .collect();
            std::fs::write(
                self.root.join("linter/ruff-report.json"),
                serde_json::Value::Array(entries).to_string(),
            )
            .unwrap();
        }

        fn args(&self, linters: &[&str]) -> CheckArgs {
            CheckArgs {
                project: ProjectArgs {
                    root: Some(self.temp.path().to_path_buf()),
                    diff: None,
                },
                ruff_report: None,
                linters: linters.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[test]
    fn test_ruff_error_on_changed_line_fails() {
        let project = Project::new();
        project.write_ruff_report(&[12, 40]);

        let code = cmd_check(project.args(&["ruff"]), None).unwrap();
        assert_eq!(code, exit_codes::FINDINGS);
    }

    #[test]
    fn test_ruff_error_off_changed_lines_passes() {
        let project = Project::new();
        project.write_ruff_report(&[1, 40]);

        let code = cmd_check(project.args(&["ruff"]), None).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    /// Scenario: a missing report aborts before any correlation.
    #[test]
    fn test_missing_ruff_report_is_config_error() {
        let project = Project::new();

        let err = cmd_check(project.args(&["ruff"]), None).unwrap_err();
        assert!(matches!(err, ChangelintError::ConfigError(_)));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_malformed_ruff_report_fails_run() {
        let project = Project::new();
        std::fs::write(project.root.join("linter/ruff-report.json"), "{}").unwrap();

        let err = cmd_check(project.args(&["ruff"]), None).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::MALFORMED_REPORT);
    }

    #[test]
    fn test_ruff_report_override() {
        let project = Project::new();
        project.write_ruff_report(&[11]);
        let custom = project.root.join("custom.json");
        std::fs::rename(project.root.join("linter/ruff-report.json"), &custom).unwrap();

        let mut args = project.args(&["ruff"]);
        args.ruff_report = Some(custom);

        assert_eq!(cmd_check(args, None).unwrap(), exit_codes::FINDINGS);
    }

    #[test]
    fn test_unknown_linter_is_config_error() {
        let project = Project::new();

        let err = cmd_check(project.args(&["pylint"]), None).unwrap_err();
        assert!(err.to_string().contains("unknown linter 'pylint'"));
    }

    #[cfg(unix)]
    #[test]
    fn test_mypy_output_is_correlated() {
        let project = Project::new();
        std::fs::write(
            project.root.join("mypy.out"),
            "app.py:13: error: Incompatible return value type  [return-value]\n\
             app.py:99: error: Unrelated  [misc]\n\
             Found 2 errors in 1 file (checked 1 source file)\n",
        )
        .unwrap();
        std::fs::write(
            project.root.join("changelint.yaml"),
            "mypy_command: \"sh -c 'cat mypy.out; exit 1'\"\n",
        )
        .unwrap();

        let code = cmd_check(project.args(&["mypy"]), None).unwrap();
        assert_eq!(code, exit_codes::FINDINGS);
    }

    #[cfg(unix)]
    #[test]
    fn test_mypy_clean_output_passes() {
        let project = Project::new();
        let config = project.root.join("ci.yaml");
        std::fs::write(
            &config,
            "linters: [mypy]\nmypy_command: \"sh -c 'echo Success: no issues found'\"\n",
        )
        .unwrap();

        let code = cmd_check(project.args(&[]), Some(&config)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_missing_mypy_is_tool_error() {
        let project = Project::new();
        std::fs::write(
            project.root.join("changelint.yaml"),
            "mypy_command: no-such-mypy-binary-xyz\n",
        )
        .unwrap();

        let err = cmd_check(project.args(&["mypy"]), None).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);
    }

    #[test]
    fn test_parse_linters() {
        assert_eq!(
            parse_linters(&["mypy".to_string(), "ruff".to_string()]).unwrap(),
            vec![LinterKind::Mypy, LinterKind::Ruff]
        );
        assert!(parse_linters(&["eslint".to_string()]).is_err());
    }

    #[test]
    fn test_duplicate_linter_flags_are_rejected() {
        let project = Project::new();
        project.write_ruff_report(&[]);

        let err = cmd_check(project.args(&["ruff", "ruff"]), None).unwrap_err();
        assert!(matches!(err, ChangelintError::ConfigError(_)));
    }
}
