//! Visual theme and styling.

use console::Style;

/// devready's visual theme.
#[derive(Debug, Clone)]
pub struct DevreadyTheme {
    /// Style for installed dependencies (green).
    pub success: Style,
    /// Style for missing dependencies (red bold).
    pub error: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for remediation hints (magenta dim).
    pub hint: Style,
    /// Style for dependency names (bold).
    pub key: Style,
}

impl Default for DevreadyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DevreadyTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    ///
    /// `no_color` forces the plain theme, as `--no-color` does.
    pub fn detect(no_color: bool) -> Self {
        if should_use_colors(no_color) {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format an indented hint.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }
}

/// Whether colored output should be used.
///
/// Respects the `no_color` flag and `NO_COLOR`, and falls back to plain
/// output when stdout is not a terminal.
pub fn should_use_colors(no_color: bool) -> bool {
    if no_color || std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
