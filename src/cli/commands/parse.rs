//! Parse command implementation.
//!
//! The `lint-status parse` command reads a status report and lists its
//! lines as `line:column: message`.

use std::io::Write;
use std::path::Path;

use crate::cli::args::ParseArgs;
use crate::error::{LintStatusError, Result};
use crate::report::parse_status;

use super::dispatcher::{Command, CommandResult};
use super::read_input;

/// The parse command implementation.
pub struct ParseCommand {
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(args: ParseArgs) -> Self {
        Self { args }
    }
}

impl Command for ParseCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let path = self.args.file.as_deref().unwrap_or(Path::new("-"));
        let text = read_input(path)?;

        let lines = match parse_status(&text) {
            Ok(lines) => lines,
            Err(e @ LintStatusError::MalformedReport { .. }) => {
                tracing::error!("{}", e);
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        for line in &lines {
            match line.implied_names() {
                Some(names) => writeln!(out, "implied globals: {}", names.join(", "))?,
                None => writeln!(out, "{}:{}: {}", line.line, line.column, line.message)?,
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run(report: &str) -> (CommandResult, String) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.txt");
        fs::write(&path, report).unwrap();
        let cmd = ParseCommand::new(ParseArgs { file: Some(path) });

        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_findings_and_implied_globals() {
        let (result, output) =
            run("::::1::1::Missing semicolon.\n-1::-1::engine had a fatal error\n0::0::Implied globals:bar, foo\n");

        assert!(result.success);
        assert_eq!(
            output,
            "1:1: Missing semicolon.\n-1:-1: engine had a fatal error\nimplied globals: bar, foo\n"
        );
    }

    #[test]
    fn empty_report_lists_nothing() {
        let (result, output) = run("");

        assert!(result.success);
        assert!(output.is_empty());
    }

    #[test]
    fn malformed_report_fails() {
        let (result, output) = run("::::not a report");

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(output.is_empty());
    }

    #[test]
    fn missing_file_is_error() {
        let cmd = ParseCommand::new(ParseArgs {
            file: Some(PathBuf::from("/definitely/not/here.txt")),
        });

        assert!(cmd.execute(&mut Vec::new()).is_err());
    }
}
