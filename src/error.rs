//! Error types for lint-status operations.
//!
//! This module defines [`LintStatusError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint findings are data, never errors; they travel in a report
//! - Use `LintStatusError` for operational failures (config, engine, I/O)
//! - Use `anyhow::Error` (via `LintStatusError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lint-status operations.
#[derive(Debug, Error)]
pub enum LintStatusError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The engine program could not be started.
    #[error("Failed to start lint engine '{command}': {message}")]
    EngineSpawn { command: String, message: String },

    /// The engine ran but its output was not a lint result.
    #[error("Lint engine '{command}' (exit code {code:?}) produced unreadable output: {message}")]
    EngineOutput {
        command: String,
        code: Option<i32>,
        message: String,
    },

    /// A status report line did not follow the `line::column::reason` shape.
    #[error("Malformed report at line {line}: {message}")]
    MalformedReport { line: usize, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lint-status operations.
pub type Result<T> = std::result::Result<T, LintStatusError>;
