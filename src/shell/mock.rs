//! Scripted process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] with pre-configured outcomes
//! per command line and records every call for later assertion. Commands
//! without a configured outcome fail as if the binary were missing.
//!
//! # Example
//!
//! ```
//! use devready::shell::{CommandOptions, MockRunner, ProcessRunner};
//!
//! # tokio_test_block(async {
//! let runner = MockRunner::new()
//!     .with_output("node --version", "v20.11.0\n")
//!     .with_failure("pod --version", 127, "pod: command not found");
//!
//! let output = runner.run("node --version", &CommandOptions::default()).await.unwrap();
//! assert_eq!(output.stdout, "v20.11.0\n");
//! assert!(runner.run("pod --version", &CommandOptions::default()).await.is_err());
//! assert_eq!(runner.calls(), vec!["node --version", "pod --version"]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::command::{CommandError, CommandOptions, CommandOutput, ProcessRunner};

#[derive(Debug, Clone)]
enum Scripted {
    Output(CommandOutput),
    Failure { code: Option<i32>, stderr: String },
    Hang,
}

#[derive(Debug, Default)]
struct MockState {
    scripted: HashMap<String, Scripted>,
    calls: Vec<(String, CommandOptions)>,
}

/// Process runner with scripted outcomes.
///
/// Clones share state, so a clone handed to the code under test still
/// records into the original.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    state: Arc<Mutex<MockState>>,
}

impl MockRunner {
    /// Create a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` succeed with the given stdout.
    pub fn with_output(self, command: &str, stdout: &str) -> Self {
        self.script(command, Scripted::Output(CommandOutput::stdout(stdout)))
    }

    /// Make `command` succeed with the given stdout and stderr.
    pub fn with_output_and_stderr(self, command: &str, stdout: &str, stderr: &str) -> Self {
        self.script(
            command,
            Scripted::Output(CommandOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
        )
    }

    /// Make `command` exit with a failure status.
    pub fn with_failure(self, command: &str, code: i32, stderr: &str) -> Self {
        self.script(
            command,
            Scripted::Failure {
                code: Some(code),
                stderr: stderr.to_string(),
            },
        )
    }

    /// Make `command` never complete.
    pub fn with_hang(self, command: &str) -> Self {
        self.script(command, Scripted::Hang)
    }

    /// Command lines run so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.iter().map(|(c, _)| c.clone()).collect()
    }

    /// Options passed with each call, in call order.
    pub fn calls_with_options(&self) -> Vec<(String, CommandOptions)> {
        self.lock().calls.clone()
    }

    fn script(self, command: &str, outcome: Scripted) -> Self {
        self.lock().scripted.insert(command.to_string(), outcome);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProcessRunner for MockRunner {
    async fn run(
        &self,
        command: &str,
        options: &CommandOptions,
    ) -> Result<CommandOutput, CommandError> {
        let scripted = {
            let mut state = self.lock();
            state.calls.push((command.to_string(), options.clone()));
            state.scripted.get(command).cloned()
        };

        match scripted {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::Failure { code, stderr }) => Err(CommandError::Failed {
                command: command.to_string(),
                code,
                stderr,
            }),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(CommandError::Spawn {
                command: command.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no scripted outcome for command",
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn scripted_output_is_returned() {
        let runner = MockRunner::new().with_output("node --version", "v20.11.0\n");
        let output = runner
            .run("node --version", &CommandOptions::default())
            .await
            .unwrap();
        assert_eq!(output.stdout, "v20.11.0\n");
    }

    #[tokio::test]
    async fn unscripted_command_is_spawn_error() {
        let runner = MockRunner::new();
        let err = runner
            .run("pod --version", &CommandOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[tokio::test]
    async fn failure_carries_code_and_stderr() {
        let runner = MockRunner::new().with_failure("npm ls", 1, "missing: react");
        let err = runner
            .run("npm ls", &CommandOptions::default())
            .await
            .unwrap_err();
        match err {
            CommandError::Failed { code, stderr, .. } => {
                assert_eq!(code, Some(1));
                assert!(stderr.contains("react"));
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn hang_never_completes() {
        let runner = MockRunner::new().with_hang("xcrun simctl list runtimes");
        let result = tokio::time::timeout(
            Duration::from_millis(50),
            runner.run("xcrun simctl list runtimes", &CommandOptions::default()),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn clones_share_call_log() {
        let runner = MockRunner::new().with_output("echo", "x");
        let clone = runner.clone();
        clone
            .run("echo", &CommandOptions::in_dir("/tmp/project"))
            .await
            .unwrap();

        let calls = runner.calls_with_options();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1.cwd.as_deref(), Some(std::path::Path::new("/tmp/project")));
    }
}
