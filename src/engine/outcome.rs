//! Lint engine result structures.
//!
//! The engine speaks JSON on the wire:
//!
//! ```json
//! {
//!   "ok": false,
//!   "errors": [{"line": 0, "character": 4, "reason": "Missing semicolon."}, null],
//!   "implied": {"foo": true}
//! }
//! ```
//!
//! Coordinates are 0-based. A `null` entry in `errors` marks a fatal error
//! inside the engine and becomes [`EngineFinding::Fatal`].

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// One entry of the engine's error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineFinding {
    /// A positional finding, 0-based.
    Reported {
        line: i64,
        character: i64,
        reason: String,
    },
    /// The engine hit an internal fatal error at this point.
    Fatal,
}

#[derive(Deserialize)]
struct RawFinding {
    line: i64,
    character: i64,
    reason: String,
}

impl<'de> Deserialize<'de> for EngineFinding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawFinding>::deserialize(deserializer)? {
            Some(RawFinding {
                line,
                character,
                reason,
            }) => EngineFinding::Reported {
                line,
                character,
                reason,
            },
            None => EngineFinding::Fatal,
        })
    }
}

impl EngineFinding {
    /// Create a positional finding.
    pub fn reported(line: i64, character: i64, reason: impl Into<String>) -> Self {
        EngineFinding::Reported {
            line,
            character,
            reason: reason.into(),
        }
    }
}

/// Everything the engine reports about one source string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LintOutcome {
    /// Whether the engine accepted the source.
    #[serde(rename = "ok")]
    pub passed: bool,
    /// Findings in engine emission order.
    #[serde(default)]
    pub errors: Vec<EngineFinding>,
    /// Implied (used but undeclared) globals. Only engine-inserted keys exist;
    /// the marker value is never inspected.
    #[serde(default)]
    pub implied: HashMap<String, serde_json::Value>,
}

impl LintOutcome {
    /// An outcome for a source the engine accepted.
    pub fn passed() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// An outcome for a source the engine rejected, with no findings yet.
    pub fn failed() -> Self {
        Self::default()
    }

    /// Add a finding.
    pub fn with_error(mut self, finding: EngineFinding) -> Self {
        self.errors.push(finding);
        self
    }

    /// Add an implied global name.
    pub fn with_implied(mut self, name: impl Into<String>) -> Self {
        self.implied.insert(name.into(), serde_json::Value::Bool(true));
        self
    }
}
