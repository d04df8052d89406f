//! Error types for devready operations.
//!
//! This module defines [`DevreadyError`], the crate-level error type, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Dependency checks never fail: probe errors are folded into an absent
//!   outcome and reported in the result payload
//! - Use `DevreadyError` for the surfaces around the checks (config loading,
//!   the message channel, CLI I/O)
//! - Use `anyhow::Error` (via `DevreadyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devready operations.
#[derive(Debug, Error)]
pub enum DevreadyError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The message channel has no consumer left.
    #[error("Message channel closed")]
    ChannelClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DevreadyError {
    /// Whether this error comes from loading configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. } | Self::ConfigParseError { .. })
    }
}

/// Result type alias for devready operations.
pub type Result<T> = std::result::Result<T, DevreadyError>;
