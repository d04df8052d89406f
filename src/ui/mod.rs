//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] capturing output for tests
//! - [`DevreadyTheme`] and [`StatusKind`] for consistent styling

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DevreadyTheme};

use crate::requirements::{CheckResult, Dependency};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);


    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Show the result of one dependency check.
    fn show_check(&mut self, dependency: Dependency, result: &CheckResult);
}
