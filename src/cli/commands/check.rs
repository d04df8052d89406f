//! Check command implementation.
//!
//! The `devready check` command runs the selected dependency checks
//! concurrently and reports them either as a human-readable list or as
//! protocol messages, one JSON object per line.

use async_trait::async_trait;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::messaging::OutboundMessage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

#[async_trait(?Send)]
impl Command for CheckCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = match self.context.build_engine() {
            Ok(engine) => engine,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let results = engine.check_many(&self.args.selected()).await;
        let missing = results.iter().filter(|(_, r)| !r.is_installed()).count();

        if self.args.json {
            for (dependency, result) in results {
                let line = serde_json::to_string(&OutboundMessage::new(dependency, result))?;
                ui.message(&line);
            }
        } else {
            ui.show_header("Dependency checks");
            for (dependency, result) in &results {
                ui.show_check(*dependency, result);
            }
            ui.message("");
            if missing == 0 {
                ui.success(&format!("All {} dependencies installed", results.len()));
            } else {
                ui.error(&format!("{} of {} dependencies missing", missing, results.len()));
            }
        }

        if missing == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Dependency;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn project_with_pods() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::create_dir_all(temp.path().join("ios/Pods")).unwrap();
        fs::write(temp.path().join("ios/Podfile.lock"), "PODS:\n").unwrap();
        temp
    }

    fn command(root: &Path, runner: MockRunner, args: CheckArgs) -> CheckCommand {
        let context = CommandContext::new(root.to_path_buf(), None).with_runner(Arc::new(runner));
        CheckCommand::new(context, args)
    }

    #[tokio::test]
    async fn all_selected_installed_exits_zero() {
        let temp = project_with_pods();
        let runner = MockRunner::new().with_output("pod --version", "1.15.2\n");
        let args = CheckArgs {
            dependencies: vec![Dependency::Pods, Dependency::CocoaPods],
            json: false,
        };
        let mut ui = MockUI::new();

        let result = command(temp.path(), runner, args).execute(&mut ui).await.unwrap();

        assert!(result.success);
        assert_eq!(ui.checks().len(), 2);
        assert!(ui.hints().is_empty());
        assert_eq!(ui.successes(), ["All 2 dependencies installed"]);
    }

    #[tokio::test]
    async fn missing_dependency_exits_one_with_hint() {
        let temp = project_with_pods();
        let runner = MockRunner::new().with_failure("npm ls", 1, "missing: react@18.2.0");
        let args = CheckArgs {
            dependencies: vec![Dependency::NodeModules],
            json: false,
        };
        let mut ui = MockUI::new();

        let result = command(temp.path(), runner, args).execute(&mut ui).await.unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.hints(), ["Node modules are not installed."]);
    }

    #[tokio::test]
    async fn json_prints_one_message_per_line() {
        let temp = project_with_pods();
        let args = CheckArgs {
            dependencies: vec![Dependency::Pods],
            json: true,
        };
        let mut ui = MockUI::new();

        command(temp.path(), MockRunner::new(), args)
            .execute(&mut ui)
            .await
            .unwrap();

        assert_eq!(ui.messages().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["command"], "isPodsInstalled");
        assert_eq!(value["data"]["installed"], true);
        assert!(value["data"].get("error").is_none());
        assert!(ui.headers().is_empty());
    }

    #[tokio::test]
    async fn invalid_config_exits_two() {
        let temp = project_with_pods();
        let config = temp.path().join("broken.yml");
        fs::write(&config, "commands: [unclosed").unwrap();

        let context = CommandContext::new(temp.path().to_path_buf(), Some(config))
            .with_runner(Arc::new(MockRunner::new()));
        let mut ui = MockUI::new();

        let result = CheckCommand::new(context, CheckArgs::default())
            .execute(&mut ui)
            .await
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.checks().is_empty());
    }
}
