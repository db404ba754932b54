//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Reports go to the writer handed to
//! [`Command::execute`]; diagnostics about the tool itself go to the log.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod parse;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Whether `path` means standard input.
pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Display name for an input path.
pub(crate) fn input_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a whole input, from stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
