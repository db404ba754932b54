//! Editor status string formatter.

use super::ReportFormatter;
use crate::report::LintReport;
use std::io::Write;

/// Writes the report as the status string a host editor reads.
///
/// Nothing is written for an empty report.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusFormatter;

impl StatusFormatter {
    /// Create a new status formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for StatusFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        if report.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", report.to_status_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Finding;

    #[test]
    fn writes_status_line() {
        let report = LintReport {
            findings: vec![Finding::new(1, 1, "Missing semicolon.")],
            implied: vec!["foo".to_string()],
        };

        let mut output = Vec::new();
        StatusFormatter::new().format(&report, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output, "::::1::1::Missing semicolon.\n0::0::Implied globals:foo\n");
    }

    #[test]
    fn empty_report_writes_nothing() {
        let mut output = Vec::new();
        StatusFormatter::new()
            .format(&LintReport::default(), &mut output)
            .unwrap();

        assert!(output.is_empty());
    }
}
