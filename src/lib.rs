//! lint-status - Report lint engine findings as an editor status string.
//!
//! lint-status runs an external lint engine on a piece of source, then
//! turns the engine's findings and implied globals into the compact
//! `::::line::column::reason` report that host editors display.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`engine`] - The external lint engine contract
//! - [`error`] - Error types and result aliases
//! - [`output`] - Report formatters (status, human, JSON)
//! - [`report`] - Report assembly, status channels, and report parsing
//!
//! # Example
//!
//! ```
//! use lint_status::engine::{EngineFinding, LintEngine, LintOutcome};
//! use lint_status::report::{lint_and_report, StatusSlot};
//!
//! struct Fixed(LintOutcome);
//!
//! impl LintEngine for Fixed {
//!     fn lint(&self, _source: &str) -> lint_status::Result<LintOutcome> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! let engine = Fixed(
//!     LintOutcome::failed()
//!         .with_error(EngineFinding::reported(0, 0, "Missing semicolon."))
//!         .with_implied("foo"),
//! );
//!
//! let mut status = StatusSlot::new();
//! lint_and_report(&engine, "foo = 1", &mut status).unwrap();
//! assert_eq!(
//!     status.get(),
//!     Some("::::1::1::Missing semicolon.\n0::0::Implied globals:foo")
//! );
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod report;

pub use error::{LintStatusError, Result};
