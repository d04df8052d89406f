//! Shell command execution.

pub mod command;
pub mod mock;

pub use command::{CommandError, CommandOptions, CommandOutput, ProcessRunner, ShellRunner};
pub use mock::MockRunner;
