//! Configuration schema definitions for lint-status.
//!
//! These structs map to the YAML configuration file format:
//!
//! ```yaml
//! engine:
//!   command: node
//!   args: [jslint-json.js]
//! format: status
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::ProcessEngine;
use crate::error::{LintStatusError, Result};
use crate::output::OutputFormat;

/// Root configuration structure for lint-status.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintStatusConfig {
    /// The external lint engine to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,

    /// Default output format
    pub format: OutputFormat,
}

/// External engine program and its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Program to run (looked up on PATH)
    pub command: String,

    /// Arguments passed before the source is piped in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl LintStatusConfig {
    /// Apply command-line overrides on top of file values.
    ///
    /// A command replaces the configured engine entirely; arguments given
    /// without a command replace only the configured arguments.
    pub fn with_overrides(
        mut self,
        command: Option<String>,
        args: Vec<String>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(command) = command {
            self.engine = Some(EngineConfig { command, args });
        } else if let Some(engine) = self.engine.as_mut() {
            if !args.is_empty() {
                engine.args = args;
            }
        }

        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Build the configured engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if no engine is configured or its
    /// command is blank.
    pub fn engine(&self) -> Result<ProcessEngine> {
        let engine = self
            .engine
            .as_ref()
            .ok_or_else(|| LintStatusError::ConfigValidationError {
                message: "no lint engine configured (set engine.command or pass --engine)"
                    .to_string(),
            })?;

        if engine.command.trim().is_empty() {
            return Err(LintStatusError::ConfigValidationError {
                message: "engine.command must not be empty".to_string(),
            });
        }

        Ok(ProcessEngine::new(engine.command.clone()).with_args(engine.args.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_config(command: &str, args: &[&str]) -> EngineConfig {
        EngineConfig {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
engine:
  command: node
  args: [jslint-json.js, --browser]
format: json
"#;
        let config: LintStatusConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.engine,
            Some(engine_config("node", &["jslint-json.js", "--browser"]))
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: LintStatusConfig = serde_yaml::from_str("{}").unwrap();

        assert!(config.engine.is_none());
        assert_eq!(config.format, OutputFormat::Status);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<LintStatusConfig, _> =
            serde_yaml::from_str("engine:\n  command: x\n  timeout: 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        let result: std::result::Result<LintStatusConfig, _> =
            serde_yaml::from_str("format: sarif\n");
        assert!(result.is_err());
    }

    #[test]
    fn command_override_replaces_engine() {
        let config = LintStatusConfig {
            engine: Some(engine_config("node", &["a.js"])),
            ..Default::default()
        }
        .with_overrides(Some("gjs".into()), vec!["b.js".into()], None);

        assert_eq!(config.engine, Some(engine_config("gjs", &["b.js"])));
    }

    #[test]
    fn args_override_keeps_command() {
        let config = LintStatusConfig {
            engine: Some(engine_config("node", &["a.js"])),
            ..Default::default()
        }
        .with_overrides(None, vec!["b.js".into()], Some(OutputFormat::Human));

        assert_eq!(config.engine, Some(engine_config("node", &["b.js"])));
        assert_eq!(config.format, OutputFormat::Human);
    }

    #[test]
    fn no_overrides_keeps_file_values() {
        let original = LintStatusConfig {
            engine: Some(engine_config("node", &["a.js"])),
            format: OutputFormat::Json,
        };

        let config = original.clone().with_overrides(None, vec![], None);

        assert_eq!(config, original);
    }

    #[test]
    fn engine_requires_command() {
        let err = LintStatusConfig::default().engine().unwrap_err();
        assert!(matches!(err, LintStatusError::ConfigValidationError { .. }));

        let blank = LintStatusConfig {
            engine: Some(engine_config("  ", &[])),
            ..Default::default()
        };
        assert!(blank.engine().is_err());
    }

    #[test]
    fn engine_builds_process_engine() {
        let config = LintStatusConfig {
            engine: Some(engine_config("node", &["a.js"])),
            ..Default::default()
        };

        let engine = config.engine().unwrap();

        assert_eq!(engine.command(), "node");
        assert_eq!(engine.args(), ["a.js"]);
    }
}
