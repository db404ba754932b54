//! Report output formatters.
//!
//! This module provides formatters for writing a [`LintReport`] in
//! different formats (editor status string, human-readable, JSON).

pub mod human;
pub mod json;
pub mod status;

use crate::report::LintReport;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Output format for lint reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The `::::line::column::reason` status string.
    #[default]
    Status,
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "status" => Ok(OutputFormat::Status),
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{}' (expected status, human or json)",
                other
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Status => write!(f, "status"),
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting lint reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use status::StatusFormatter;
