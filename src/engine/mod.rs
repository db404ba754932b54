//! External lint engine contract.
//!
//! lint-status never lints anything itself. It hands source text to an
//! engine through the [`LintEngine`] trait and reads back a [`LintOutcome`]:
//!
//! - [`outcome`] - The engine's result structures
//! - [`process`] - An engine that runs an external program

pub mod outcome;
pub mod process;

pub use outcome::{EngineFinding, LintOutcome};
pub use process::ProcessEngine;

use crate::error::Result;

/// A lint engine that checks a source string.
///
/// Calls are synchronous. An `Err` means the engine itself broke down; a
/// source with problems is still an `Ok` outcome with `passed == false`.
pub trait LintEngine {
    /// Lint `source` and return the engine's findings.
    fn lint(&self, source: &str) -> Result<LintOutcome>;
}

impl<E: LintEngine + ?Sized> LintEngine for &E {
    fn lint(&self, source: &str) -> Result<LintOutcome> {
        (**self).lint(source)
    }
}

impl<E: LintEngine + ?Sized> LintEngine for Box<E> {
    fn lint(&self, source: &str) -> Result<LintOutcome> {
        (**self).lint(source)
    }
}
