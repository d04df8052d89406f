//! List command implementation.
//!
//! The `devready list` command lists the known dependencies with their
//! protocol command names.

use async_trait::async_trait;

use crate::error::Result;
use crate::requirements::Dependency;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
#[derive(Debug, Default)]
pub struct ListCommand;

impl ListCommand {
    /// Create a new list command.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Command for ListCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Dependencies");
        for dependency in Dependency::ALL {
            ui.message(&format!(
                "  {:<16} {} -> {}",
                dependency.name(),
                dependency.check_command(),
                dependency.report_command()
            ));
            ui.show_hint(dependency.info());
        }
        Ok(CommandResult::success())
    }
}
