//! Editor status reports.
//!
//! This module turns a [`LintOutcome`] into the line-oriented report a host
//! editor reads after a check:
//!
//! ```text
//! ::::1::1::Missing semicolon.
//! 3::6::Unused variable.
//! 0::0::Implied globals:bar, foo
//! ```
//!
//! Each finding is `line::column::reason` with 1-based coordinates, and the
//! implied globals summary always sits at `0::0`. A report is only produced
//! when the engine rejected the source and at least one section has content.
//!
//! # Example
//!
//! ```
//! use lint_status::engine::{EngineFinding, LintOutcome};
//! use lint_status::report::LintReport;
//!
//! let outcome = LintOutcome::failed()
//!     .with_error(EngineFinding::reported(0, 0, "Missing semicolon."))
//!     .with_implied("foo");
//!
//! let report = LintReport::from_outcome(&outcome);
//! assert_eq!(
//!     report.to_status_string(),
//!     "::::1::1::Missing semicolon.\n0::0::Implied globals:foo"
//! );
//! ```

pub mod parse;
pub mod status;

pub use parse::{parse_status, ReportLine};
pub use status::{StatusChannel, StatusSlot};

use crate::engine::{EngineFinding, LintEngine, LintOutcome};
use crate::error::Result;

/// Marker that opens every status report.
pub const STATUS_PREFIX: &str = "::::";

/// Separator between the fields of a report line.
pub const FIELD_SEPARATOR: &str = "::";

/// Leading fields of the implied globals summary line.
pub const IMPLIED_PREFIX: &str = "0::0::Implied globals:";

pub(crate) const IMPLIED_LABEL: &str = "Implied globals:";

/// Reason used in place of a fatal engine error.
pub const FATAL_REASON: &str = "engine had a fatal error";

/// A finding with editor (1-based) coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Line, 1-based, or -1 for a fatal engine error.
    pub line: i64,
    /// Column, 1-based, or -1 for a fatal engine error.
    pub column: i64,
    /// Human-readable reason.
    pub reason: String,
    /// Set only for the stand-in of a fatal engine error.
    pub fatal: bool,
}

impl Finding {
    /// Create a finding.
    pub fn new(line: i64, column: i64, reason: impl Into<String>) -> Self {
        Self {
            line,
            column,
            reason: reason.into(),
            fatal: false,
        }
    }

    /// The sentinel that stands in for a fatal engine error.
    ///
    /// Its coordinates are not shifted like those of real findings; hosts
    /// already read `-1::-1` as "no position".
    pub fn fatal() -> Self {
        Self {
            fatal: true,
            ..Self::new(-1, -1, FATAL_REASON)
        }
    }

    /// Whether this is the fatal-error sentinel.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Render as a `line::column::reason` report line.
    pub fn to_status_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.line,
            self.column,
            self.reason,
            sep = FIELD_SEPARATOR
        )
    }
}

impl From<&EngineFinding> for Finding {
    fn from(finding: &EngineFinding) -> Self {
        match finding {
            EngineFinding::Reported {
                line,
                character,
                reason,
            } => Finding::new(
                line.saturating_add(1),
                character.saturating_add(1),
                reason.clone(),
            ),
            EngineFinding::Fatal => Finding::fatal(),
        }
    }
}

/// The structured form of a status report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Findings in engine order.
    pub findings: Vec<Finding>,
    /// Implied global names, sorted ascending.
    pub implied: Vec<String>,
}

impl LintReport {
    /// Build a report from an engine outcome.
    ///
    /// The `passed` flag is not consulted; see [`lint_report`] for the gate.
    pub fn from_outcome(outcome: &LintOutcome) -> Self {
        Self {
            findings: outcome.errors.iter().map(Finding::from).collect(),
            implied: implied_names(outcome),
        }
    }

    /// Whether neither section has content.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty() && self.implied.is_empty()
    }

    /// The findings section, or `""` if there are no findings.
    pub fn findings_section(&self) -> String {
        findings_section(&self.findings)
    }

    /// The implied globals summary line, or `""` if there are none.
    pub fn implied_section(&self) -> String {
        implied_section(&self.implied)
    }

    /// Render the full wire report, starting with [`STATUS_PREFIX`].
    ///
    /// An empty report still renders as the bare prefix; callers that must
    /// not publish empty reports check [`LintReport::is_empty`] first.
    pub fn to_status_string(&self) -> String {
        let issues: Vec<String> = [self.findings_section(), self.implied_section()]
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect();
        format!("{}{}", STATUS_PREFIX, issues.join("\n"))
    }
}

fn implied_names(outcome: &LintOutcome) -> Vec<String> {
    let mut names: Vec<String> = outcome.implied.keys().cloned().collect();
    names.sort();
    names
}

fn findings_section(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(Finding::to_status_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn implied_section(names: &[String]) -> String {
    if names.is_empty() {
        return String::new();
    }
    format!("{}{}", IMPLIED_PREFIX, names.join(", "))
}

/// Report the implied globals of an outcome.
///
/// Returns `0::0::Implied globals:<a>, <b>, ...` with names in ascending
/// order, or an empty string when the engine implied nothing.
pub fn collect_implied_names(outcome: &LintOutcome) -> String {
    implied_section(&implied_names(outcome))
}

/// Report the findings of an outcome, one `line::column::reason` per line.
///
/// Coordinates are shifted to 1-based; fatal entries become the
/// `-1::-1::engine had a fatal error` sentinel. Engine order is kept.
pub fn collect_lint_errors(outcome: &LintOutcome) -> String {
    let findings: Vec<Finding> = outcome.errors.iter().map(Finding::from).collect();
    findings_section(&findings)
}

/// Lint `source` and return the structured report, if there is one.
///
/// Returns `None` when the engine accepted the source, or when it rejected
/// it without reporting any finding or implied global.
pub fn lint_report<E>(engine: &E, source: &str) -> Result<Option<LintReport>>
where
    E: LintEngine + ?Sized,
{
    let outcome = engine.lint(source)?;
    if outcome.passed {
        tracing::debug!("Engine accepted the source");
        return Ok(None);
    }

    let report = LintReport::from_outcome(&outcome);
    tracing::debug!(
        "Engine rejected the source: {} finding(s), {} implied global(s)",
        report.findings.len(),
        report.implied.len()
    );

    if report.is_empty() {
        Ok(None)
    } else {
        Ok(Some(report))
    }
}

/// Lint `source` and publish the status report on `channel`.
///
/// The channel is written at most once and only when there is something to
/// report; a clean source leaves whatever it held before. Returns whether a
/// report was published. Engine failures propagate unchanged.
pub fn lint_and_report<E, C>(engine: &E, source: &str, channel: &mut C) -> Result<bool>
where
    E: LintEngine + ?Sized,
    C: StatusChannel + ?Sized,
{
    match lint_report(engine, source)? {
        Some(report) => {
            channel.publish(&report.to_status_string());
            Ok(true)
        }
        None => Ok(false),
    }
}
