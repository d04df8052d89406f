//! Probe primitives and their composition.
//!
//! A [`Probe`] describes how to check one external fact:
//!
//! - `Command`: run a command line; present if it completes without error
//!   and writes something to stdout. Stderr is not looked at, since several
//!   tools print warnings there during normal operation.
//! - `PathsExist`: present if every listed path exists (file or directory).
//! - `Unresolved`: a prerequisite path could not be computed; always absent.
//!
//! A [`CompositeProbe`] is the AND of its probes. All of them are evaluated
//! concurrently and the outcome is their conjunction.

use std::path::PathBuf;

use futures_util::future::join_all;

use crate::requirements::status::ProbeOutcome;
use crate::shell::{CommandOptions, ProcessRunner};
use crate::workspace::FileSystem;

/// How to check one external fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Run a command and require non-empty stdout.
    Command {
        /// Command line, run through the shell.
        command: String,
        /// Working directory.
        cwd: Option<PathBuf>,
    },

    /// Require that every path exists.
    PathsExist(Vec<PathBuf>),

    /// A prerequisite could not be resolved.
    Unresolved(String),
}

impl Probe {
    /// A command probe run in the current directory.
    pub fn command(command: impl Into<String>) -> Self {
        Probe::Command {
            command: command.into(),
            cwd: None,
        }
    }

    /// A command probe run in `cwd`.
    pub fn command_in(command: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Probe::Command {
            command: command.into(),
            cwd: Some(cwd.into()),
        }
    }

    /// A filesystem probe over `paths`.
    pub fn paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Probe::PathsExist(paths.into_iter().map(Into::into).collect())
    }

    /// A probe that is always absent.
    pub fn unresolved(reason: impl Into<String>) -> Self {
        Probe::Unresolved(reason.into())
    }

    /// Evaluate the probe.
    ///
    /// Never fails: every error is reported as [`ProbeOutcome::Absent`].
    pub async fn evaluate(&self, runner: &dyn ProcessRunner, fs: &dyn FileSystem) -> ProbeOutcome {
        match self {
            Probe::Command { command, cwd } => {
                let options = CommandOptions { cwd: cwd.clone() };
                match runner.run(command, &options).await {
                    Ok(output) if !output.stdout.is_empty() => ProbeOutcome::Present,
                    Ok(_) => ProbeOutcome::absent(format!("'{}' produced no output", command)),
                    Err(e) => ProbeOutcome::absent(e.to_string()),
                }
            }
            Probe::PathsExist(paths) => {
                if paths.is_empty() {
                    return ProbeOutcome::absent("no paths to check");
                }

                let mut missing = Vec::new();
                for path in paths {
                    if !fs.exists(path).await {
                        missing.push(path.display().to_string());
                    }
                }

                if missing.is_empty() {
                    ProbeOutcome::Present
                } else {
                    ProbeOutcome::absent(format!("missing: {}", missing.join(", ")))
                }
            }
            Probe::Unresolved(reason) => ProbeOutcome::absent(reason.clone()),
        }
    }
}

/// The logical AND of several probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeProbe {
    probes: Vec<Probe>,
}

impl CompositeProbe {
    /// Combine probes.
    pub fn new(probes: Vec<Probe>) -> Self {
        Self { probes }
    }

    /// The combined probes, in order.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Evaluate every probe concurrently and AND the outcomes.
    ///
    /// The absence reasons of all failing probes are joined in probe order.
    pub async fn evaluate(&self, runner: &dyn ProcessRunner, fs: &dyn FileSystem) -> ProbeOutcome {
        let outcomes = join_all(self.probes.iter().map(|p| p.evaluate(runner, fs))).await;

        let reasons: Vec<&str> = outcomes.iter().filter_map(ProbeOutcome::reason).collect();
        if reasons.is_empty() {
            ProbeOutcome::Present
        } else {
            ProbeOutcome::absent(reasons.join("; "))
        }
    }
}
