//! Engine backed by an external program.
//!
//! The program receives the source on stdin and must print a JSON
//! [`LintOutcome`] on stdout. Its exit status is only reported when stdout
//! cannot be read as an outcome, since wrappers commonly exit non-zero when
//! they find issues.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use super::{LintEngine, LintOutcome};
use crate::error::{LintStatusError, Result};

/// Runs an external lint engine program.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    command: String,
    args: Vec<String>,
}

impl ProcessEngine {
    /// Create an engine that runs `command` with no arguments.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Append arguments passed to the program.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The program arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl LintEngine for ProcessEngine {
    fn lint(&self, source: &str) -> Result<LintOutcome> {
        tracing::debug!(
            "Running lint engine: {} {:?} ({} bytes of source)",
            self.command,
            self.args,
            source.len()
        );

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| LintStatusError::EngineSpawn {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        // Feed stdin from its own thread so a large result on stdout cannot
        // block the engine before it has read all of the source.
        let mut stdin = child.stdin.take().ok_or_else(|| LintStatusError::EngineSpawn {
            command: self.command.clone(),
            message: "stdin was not captured".to_string(),
        })?;
        let input = source.to_owned();
        let feeder = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;

        match feeder.join() {
            Ok(Ok(())) => {}
            // The engine may exit without draining stdin; its stdout decides.
            Ok(Err(e)) => tracing::debug!("Engine closed stdin early: {}", e),
            Err(_) => {
                return Err(anyhow::anyhow!("stdin writer thread panicked").into());
            }
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::warn!("Lint engine stderr: {}", stderr.trim());
        }

        serde_json::from_slice::<LintOutcome>(&output.stdout).map_err(|e| {
            let mut message = e.to_string();
            if !stderr.trim().is_empty() {
                message = format!("{} (stderr: {})", message, stderr.trim());
            }
            LintStatusError::EngineOutput {
                command: self.command.clone(),
                code: output.status.code(),
                message,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineFinding;

    fn sh(script: &str) -> ProcessEngine {
        ProcessEngine::new("sh").with_args(["-c", script])
    }

    #[test]
    fn builder_keeps_command_and_args() {
        let engine = ProcessEngine::new("node").with_args(["a.js", "--strict"]);

        assert_eq!(engine.command(), "node");
        assert_eq!(engine.args(), ["a.js", "--strict"]);
    }

    #[cfg(unix)]
    #[test]
    fn reads_passing_outcome() {
        let engine = sh(r#"cat >/dev/null; echo '{"ok": true}'"#);

        let outcome = engine.lint("var a = 1;").unwrap();

        assert!(outcome.passed);
    }

    #[cfg(unix)]
    #[test]
    fn reads_findings_and_fatal_entries() {
        let engine = sh(
            r#"cat >/dev/null; echo '{"ok": false, "errors": [{"line": 1, "character": 2, "reason": "Bad."}, null], "implied": {"foo": true}}'; exit 1"#,
        );

        let outcome = engine.lint("foo = 1").unwrap();

        assert!(!outcome.passed);
        assert_eq!(
            outcome.errors,
            vec![EngineFinding::reported(1, 2, "Bad."), EngineFinding::Fatal]
        );
        assert!(outcome.implied.contains_key("foo"));
    }

    #[cfg(unix)]
    #[test]
    fn source_is_passed_on_stdin() {
        // Echo the source length back through the reason field.
        let engine = sh(
            r#"n=$(wc -c | tr -d ' '); printf '{"ok": false, "errors": [{"line": 0, "character": 0, "reason": "%s"}]}' "$n""#,
        );

        let outcome = engine.lint("12345").unwrap();

        assert_eq!(outcome.errors, vec![EngineFinding::reported(0, 0, "5")]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_output_is_engine_output_error() {
        let engine = sh("cat >/dev/null; echo 'not json'; echo oops >&2; exit 7");

        let err = engine.lint("x").unwrap_err();

        match err {
            LintStatusError::EngineOutput { code, message, .. } => {
                assert_eq!(code, Some(7));
                assert!(message.contains("oops"));
            }
            other => panic!("Expected EngineOutput, got {:?}", other),
        }
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let engine = ProcessEngine::new("lint-status-definitely-not-installed");

        let err = engine.lint("x").unwrap_err();

        assert!(matches!(err, LintStatusError::EngineSpawn { .. }));
    }
}
