//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{DevreadyTheme, StatusKind, UserInterface};
use crate::requirements::{CheckResult, Dependency};

/// UI writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: DevreadyTheme,
    icons: bool,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors and icons from the environment.
    ///
    /// `no_color` turns colors off regardless of the terminal.
    pub fn new(no_color: bool) -> Self {
        let term = Term::stdout();
        let icons = term.is_term();
        Self {
            term,
            theme: DevreadyTheme::detect(no_color),
            icons,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new(false)
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
    }

    fn show_check(&mut self, dependency: Dependency, result: &CheckResult) {
        let status = StatusKind::from(result);
        let label = format!(
            "{} {}",
            self.theme.key.apply_to(dependency.name()),
            self.theme.dim.apply_to(result.info())
        );
        let line = if self.icons {
            status.format(&self.theme, &label)
        } else {
            status.format_plain(&label)
        };
        writeln!(self.term, "{}", line).ok();

        if let Some(error) = result.error() {
            self.show_hint(error);
        }
    }
}
