//! JSON output formatter.
//!
//! Formats lint reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::report::LintReport;
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    findings: Vec<JsonFinding<'a>>,
    implied: &'a [String],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    line: i64,
    column: i64,
    reason: &'a str,
    fatal: bool,
}

#[derive(Serialize)]
struct JsonSummary {
    findings: usize,
    implied: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let findings = report
            .findings
            .iter()
            .map(|f| JsonFinding {
                line: f.line,
                column: f.column,
                reason: &f.reason,
                fatal: f.is_fatal(),
            })
            .collect();

        let output = JsonOutput {
            findings,
            implied: &report.implied,
            summary: JsonSummary {
                findings: report.findings.len(),
                implied: report.implied.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
