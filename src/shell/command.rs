//! Shell command execution.
//!
//! [`ProcessRunner`] is the process-execution primitive the command probes
//! are written against. [`ShellRunner`] is the production implementation:
//! it runs a command line through the platform shell and captures its
//! output. A non-zero exit status is reported as an error, so callers only
//! ever see output from commands that completed successfully.
//!
//! No timeout is applied. A command that never exits keeps the caller
//! waiting.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Captured output of a command that completed successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Output with the given stdout and empty stderr.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

impl CommandOptions {
    /// Options that run the command in `cwd`.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: Some(cwd.into()) }
    }
}

/// Why a command did not produce usable output.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The shell process could not be started.
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Process-execution primitive.
///
/// Implementations run `command` to completion and return its captured
/// output, or an error when it could not be started or exited with a
/// failure status.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a command line.
    async fn run(
        &self,
        command: &str,
        options: &CommandOptions,
    ) -> Result<CommandOutput, CommandError>;
}

/// Runs commands through the user's shell using `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for ShellRunner {
    async fn run(
        &self,
        command: &str,
        options: &CommandOptions,
    ) -> Result<CommandOutput, CommandError> {
        let start = Instant::now();

        let mut cmd = Command::new(detect_shell());
        cmd.arg(shell_flag());
        cmd.arg(command);

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = cmd.output().await.map_err(|source| CommandError::Spawn {
            command: command.to_string(),
            source,
        })?;

        let duration: Duration = start.elapsed();
        debug!(
            command,
            code = ?output.status.code(),
            elapsed_ms = duration.as_millis() as u64,
            "Command finished"
        );

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            Err(CommandError::Failed {
                command: command.to_string(),
                code: output.status.code(),
                stderr,
            })
        }
    }
}

/// Detect the shell used to run command lines.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lc` (login, non-interactive) on Unix so that PATH additions made
/// in login profiles (nvm, rbenv, Homebrew) apply to the probed tools.
/// Interactive mode is avoided because checks run without a TTY.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}
