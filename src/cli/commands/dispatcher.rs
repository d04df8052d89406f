//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for building the engine from the global flags
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{load_config, ProbeConfig};
use crate::error::Result;
use crate::requirements::VerificationEngine;
use crate::shell::{ProcessRunner, ShellRunner};
use crate::ui::UserInterface;
use crate::workspace::{find_workspace_root, ProjectWorkspace, StdFileSystem};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
#[async_trait(?Send)]
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything a command needs to build a verification engine.
#[derive(Clone)]
pub struct CommandContext {
    project_dir: PathBuf,
    config_file: Option<PathBuf>,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandContext {
    /// Create a context rooted at `project_dir` using the shell runner.
    pub fn new(project_dir: PathBuf, config_file: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            config_file,
            runner: Arc::new(ShellRunner::new()),
        }
    }

    /// Replace the process runner.
    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// The directory the workspace search starts from.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The nearest enclosing workspace root.
    pub fn workspace_root(&self) -> Option<PathBuf> {
        find_workspace_root(&self.project_dir)
    }

    /// Load configuration and assemble the engine.
    pub fn build_engine(&self) -> Result<VerificationEngine> {
        let root = self.workspace_root();
        let config = load_config(root.as_deref(), self.config_file.as_deref())?;
        let probe_config = ProbeConfig::resolve(&config);
        tracing::debug!(?root, ?probe_config, "Resolved probe configuration");

        Ok(VerificationEngine::new(
            probe_config,
            Arc::clone(&self.runner),
            Arc::new(StdFileSystem::new()),
            Arc::new(ProjectWorkspace::new(root, config.ios.source_dir)),
        ))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// The shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand runs every check.
    pub async fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui).await
            }
            Some(Commands::Serve) => {
                let cmd = super::serve::ServeCommand::new(self.context.clone());
                cmd.execute(ui).await
            }
            Some(Commands::List) => super::list::ListCommand::new().execute(ui).await,
            None => {
                let cmd =
                    super::check::CheckCommand::new(self.context.clone(), CheckArgs::default());
                cmd.execute(ui).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_codes() {
        assert_eq!(CommandResult::success().exit_code, 0);
        let failure = CommandResult::failure(2);
        assert!(!failure.success);
        assert_eq!(failure.exit_code, 2);
    }

    #[test]
    fn context_finds_workspace_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::create_dir_all(temp.path().join("src/screens")).unwrap();

        let context = CommandContext::new(temp.path().join("src/screens"), None);
        assert_eq!(context.workspace_root(), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn build_engine_applies_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::create_dir_all(temp.path().join(".devready")).unwrap();
        fs::write(
            temp.path().join(".devready/config.yml"),
            "commands:\n  node_version: node -v\n",
        )
        .unwrap();

        let engine = CommandContext::new(temp.path().to_path_buf(), None)
            .build_engine()
            .unwrap();
        assert_eq!(engine.config().commands.node_version, "node -v");
    }

    #[test]
    fn build_engine_fails_on_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let context = CommandContext::new(
            temp.path().to_path_buf(),
            Some(temp.path().join("missing.yml")),
        );
        assert!(context.build_engine().is_err());
    }

    #[tokio::test]
    async fn list_is_dispatched() {
        let temp = TempDir::new().unwrap();
        let dispatcher =
            CommandDispatcher::new(CommandContext::new(temp.path().to_path_buf(), None));
        let cli = Cli::parse_from(["devready", "list"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).await.unwrap();
        assert!(result.success);
        assert!(!ui.messages().is_empty());
    }

    #[tokio::test]
    async fn no_subcommand_checks_everything() {
        let temp = TempDir::new().unwrap();
        let context = CommandContext::new(temp.path().to_path_buf(), None)
            .with_runner(Arc::new(MockRunner::new()));
        let dispatcher = CommandDispatcher::new(context);
        let cli = Cli::parse_from(["devready"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).await.unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.checks().len(), 6);
    }
}
