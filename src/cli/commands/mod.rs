//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that runs checks
//! builds its engine from the shared [`CommandContext`].

pub mod check;
pub mod dispatcher;
pub mod list;
pub mod serve;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
