//! Status vocabulary for check output.

use super::theme::DevreadyTheme;
use crate::requirements::CheckResult;

/// Display status of one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The dependency is installed.
    Installed,
    /// The dependency is missing.
    Missing,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Installed => "✓",
            Self::Missing => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Installed => "[ok]",
            Self::Missing => "[missing]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &DevreadyTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Installed => theme.success.apply_to(icon).to_string(),
            Self::Missing => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &DevreadyTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<&CheckResult> for StatusKind {
    fn from(result: &CheckResult) -> Self {
        if result.is_installed() {
            Self::Installed
        } else {
            Self::Missing
        }
    }
}
