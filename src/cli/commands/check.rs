//! Check command implementation.
//!
//! The `lint-status check` command runs the configured lint engine on a
//! source file and writes the resulting report.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_config, LintStatusConfig};
use crate::error::Result;
use crate::output::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, StatusFormatter,
};
use crate::report::{lint_report, LintReport};

use super::dispatcher::{Command, CommandResult};
use super::{input_name, read_input};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Load the config file and apply command-line overrides.
    fn resolve_config(&self) -> Result<LintStatusConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        Ok(config.with_overrides(
            self.args.engine.clone(),
            self.args.engine_args.clone(),
            self.args.format,
        ))
    }

    /// Write the report using the appropriate formatter.
    fn write_report(
        &self,
        format: OutputFormat,
        report: &LintReport,
        mut out: &mut dyn Write,
    ) -> std::io::Result<()> {
        match format {
            OutputFormat::Status => StatusFormatter::new().format(report, &mut out),
            OutputFormat::Human => {
                if report.is_empty() {
                    writeln!(out, "No issues found.")
                } else {
                    HumanFormatter::new(input_name(&self.args.file)).format(report, &mut out)
                }
            }
            OutputFormat::Json => JsonFormatter::new().format(report, &mut out),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = self.resolve_config()?;
        let engine = config.engine()?;
        let source = read_input(&self.args.file)?;

        tracing::debug!(
            "Checking {} with {} ({} output)",
            input_name(&self.args.file),
            engine.command(),
            config.format
        );

        let report = lint_report(&engine, &source)?;
        let has_report = report.is_some();
        let report = report.unwrap_or_default();

        self.write_report(config.format, &report, out)?;

        if has_report {
            tracing::info!(
                "{}: {} finding(s), {} implied global(s)",
                input_name(&self.args.file),
                report.findings.len(),
                report.implied.len()
            );
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintStatusError;
    use std::fs;
    use tempfile::TempDir;

    fn check_args(file: &Path, script: &str) -> CheckArgs {
        CheckArgs {
            file: file.to_path_buf(),
            engine: Some("sh".to_string()),
            engine_args: vec!["-c".to_string(), script.to_string()],
            format: None,
        }
    }

    fn setup_source() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("app.js");
        fs::write(&file, "foo = 1").unwrap();
        (temp, file)
    }

    const FAILING_ENGINE: &str = r#"cat >/dev/null; echo '{"ok": false, "errors": [{"line": 0, "character": 0, "reason": "Missing semicolon."}], "implied": {"foo": true}}'"#;
    const PASSING_ENGINE: &str = r#"cat >/dev/null; echo '{"ok": true}'"#;

    #[test]
    fn check_command_creation() {
        let (temp, file) = setup_source();
        let cmd = CheckCommand::new(temp.path(), None, check_args(&file, PASSING_ENGINE));

        assert_eq!(cmd.project_root(), temp.path());
        assert_eq!(cmd.args().file, file);
    }

    #[test]
    fn check_without_engine_fails() {
        let (temp, file) = setup_source();
        let args = CheckArgs {
            file,
            engine: None,
            engine_args: vec![],
            format: None,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);

        let err = cmd.execute(&mut Vec::new()).unwrap_err();

        assert!(matches!(err, LintStatusError::ConfigValidationError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn check_writes_status_report() {
        let (temp, file) = setup_source();
        let cmd = CheckCommand::new(temp.path(), None, check_args(&file, FAILING_ENGINE));

        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "::::1::1::Missing semicolon.\n0::0::Implied globals:foo\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn check_clean_source_writes_nothing() {
        let (temp, file) = setup_source();
        let cmd = CheckCommand::new(temp.path(), None, check_args(&file, PASSING_ENGINE));

        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();

        assert!(result.success);
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn check_human_format() {
        let (temp, file) = setup_source();
        let mut args = check_args(&file, FAILING_ENGINE);
        args.format = Some(OutputFormat::Human);
        let cmd = CheckCommand::new(temp.path(), None, args);

        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("error: Missing semicolon."));
        assert!(output.contains("app.js:1:1"));
        assert!(output.contains("implied globals: foo"));
    }

    #[cfg(unix)]
    #[test]
    fn check_human_format_clean() {
        let (temp, file) = setup_source();
        let mut args = check_args(&file, PASSING_ENGINE);
        args.format = Some(OutputFormat::Human);
        let cmd = CheckCommand::new(temp.path(), None, args);

        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No issues found.\n");
    }

    #[cfg(unix)]
    #[test]
    fn check_uses_config_file() {
        let (temp, file) = setup_source();
        fs::write(
            temp.path().join("lint-status.yml"),
            format!(
                "engine:\n  command: sh\n  args: ['-c', {:?}]\nformat: json\n",
                PASSING_ENGINE
            ),
        )
        .unwrap();
        let args = CheckArgs {
            file,
            engine: None,
            engine_args: vec![],
            format: None,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);

        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();

        assert!(result.success);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["summary"]["findings"], 0);
    }

    #[test]
    fn check_missing_source_is_io_error() {
        let temp = TempDir::new().unwrap();
        let args = check_args(&temp.path().join("missing.js"), PASSING_ENGINE);
        let cmd = CheckCommand::new(temp.path(), None, args);

        let err = cmd.execute(&mut Vec::new()).unwrap_err();

        assert!(matches!(err, LintStatusError::Io(_)));
    }
}
