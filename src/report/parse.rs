//! Reading status reports back.
//!
//! Hosts that receive a report as text (for example on an engine wrapper's
//! stdout) use [`parse_status`] to recover the individual lines.

use super::{FIELD_SEPARATOR, IMPLIED_LABEL, STATUS_PREFIX};
use crate::error::{LintStatusError, Result};

/// One line of a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Line number as written in the report.
    pub line: i64,
    /// Column as written in the report.
    pub column: i64,
    /// Everything after the second separator.
    pub message: String,
}

impl ReportLine {
    /// Whether this is the implied globals summary line.
    pub fn is_implied_summary(&self) -> bool {
        self.line == 0 && self.column == 0 && self.message.starts_with(IMPLIED_LABEL)
    }

    /// The implied global names, if this is the summary line.
    pub fn implied_names(&self) -> Option<Vec<String>> {
        if self.line != 0 || self.column != 0 {
            return None;
        }
        let names = self.message.strip_prefix(IMPLIED_LABEL)?;
        Some(
            names
                .split(", ")
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Parse a status report into its lines.
///
/// The leading `::::` marker is optional and blank lines are skipped. A
/// reason may itself contain `::`; only the first two separators split.
/// Reasons are kept verbatim, trailing whitespace included.
pub fn parse_status(text: &str) -> Result<Vec<ReportLine>> {
    let text = text.trim_start();
    let body = text.strip_prefix(STATUS_PREFIX).unwrap_or(text);

    body.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line.trim_end_matches('\r')))
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<ReportLine> {
    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let (Some(line_no), Some(column), Some(message)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(LintStatusError::MalformedReport {
            line: number,
            message: format!("expected line::column::reason, got '{}'", line),
        });
    };

    let parse_number = |field: &str, what: &str| {
        field
            .trim()
            .parse::<i64>()
            .map_err(|_| LintStatusError::MalformedReport {
                line: number,
                message: format!("{} '{}' is not a number", what, field),
            })
    };

    Ok(ReportLine {
        line: parse_number(line_no, "line")?,
        column: parse_number(column, "column")?,
        message: message.to_string(),
    })
}
