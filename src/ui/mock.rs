//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use devready::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking dependencies");
//! ui.success("Node.js");
//!
//! assert!(ui.messages().contains(&"Checking dependencies".to_string()));
//! assert!(ui.successes().contains(&"Node.js".to_string()));
//! ```

use super::UserInterface;
use crate::requirements::{CheckResult, Dependency};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    checks: Vec<(Dependency, CheckResult)>,
}

impl MockUI {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Errors shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Headers shown.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Hints shown.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Check results shown, in display order.
    pub fn checks(&self) -> &[(Dependency, CheckResult)] {
        &self.checks
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_check(&mut self, dependency: Dependency, result: &CheckResult) {
        self.checks.push((dependency, result.clone()));
        if let Some(error) = result.error() {
            self.show_hint(error);
        }
    }
}
