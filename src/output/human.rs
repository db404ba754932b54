//! Human-readable output formatter.
//!
//! Formats lint reports for terminal display.

use super::ReportFormatter;
use crate::report::LintReport;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Name shown in location lines (a path, or `<stdin>`).
    pub source_name: String,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        for finding in &report.findings {
            writeln!(writer, "error: {}", finding.reason)?;

            // Fatal engine errors have no position worth pointing at
            if finding.is_fatal() {
                writeln!(writer, "  --> {}", self.source_name)?;
            } else {
                writeln!(
                    writer,
                    "  --> {}:{}:{}",
                    self.source_name, finding.line, finding.column
                )?;
            }

            writeln!(writer)?;
        }

        if !report.implied.is_empty() {
            writeln!(writer, "note: implied globals: {}", report.implied.join(", "))?;
            writeln!(writer)?;
        }

        if !report.is_empty() {
            writeln!(
                writer,
                "Found {} issue(s) and {} implied global(s)",
                report.findings.len(),
                report.implied.len()
            )?;
        }

        Ok(())
    }
}
