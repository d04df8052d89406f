//! Outcome and result types for dependency checks.
//!
//! A probe produces a [`ProbeOutcome`]; the engine turns the outcome of a
//! dependency's composite probe into the [`CheckResult`] reported to the
//! consumer.

use serde::{Deserialize, Serialize};

use crate::requirements::registry::Dependency;

/// The outcome of evaluating a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The checked thing is there.
    Present,

    /// The checked thing is missing.
    Absent {
        /// Diagnostic detail (failed command, missing path). Logged only.
        reason: String,
    },
}

impl ProbeOutcome {
    /// Create an absent outcome.
    pub fn absent(reason: impl Into<String>) -> Self {
        Self::Absent {
            reason: reason.into(),
        }
    }

    /// Whether the outcome is present.
    pub fn is_present(&self) -> bool {
        matches!(self, ProbeOutcome::Present)
    }

    /// The absence reason, if absent.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Present => None,
            ProbeOutcome::Absent { reason } => Some(reason),
        }
    }
}

/// The canonical result reported for every dependency check.
///
/// `error` is set if and only if `installed` is false. The constructors are
/// the only way to build one, and deserialization rejects payloads that
/// break the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCheckResult")]
pub struct CheckResult {
    installed: bool,
    info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckResult {
    /// A result for an installed dependency.
    pub fn installed(info: impl Into<String>) -> Self {
        Self {
            installed: true,
            info: info.into(),
            error: None,
        }
    }

    /// A result for a missing dependency.
    pub fn missing(info: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            installed: false,
            info: info.into(),
            error: Some(error.into()),
        }
    }

    /// Build the result for `dependency` from its probe outcome.
    pub fn for_dependency(dependency: Dependency, outcome: &ProbeOutcome) -> Self {
        if outcome.is_present() {
            Self::installed(dependency.info())
        } else {
            Self::missing(dependency.info(), dependency.install_hint())
        }
    }

    /// Whether the dependency is installed.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Static description of what the check verifies.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Remediation hint, present only when not installed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Deserialize)]
struct RawCheckResult {
    installed: bool,
    info: String,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawCheckResult> for CheckResult {
    type Error = String;

    fn try_from(raw: RawCheckResult) -> Result<Self, Self::Error> {
        match (raw.installed, raw.error) {
            (true, None) => Ok(Self::installed(raw.info)),
            (false, Some(error)) => Ok(Self::missing(raw.info, error)),
            (true, Some(_)) => Err("an installed result cannot carry an error".to_string()),
            (false, None) => Err("a missing result must carry an error".to_string()),
        }
    }
}
