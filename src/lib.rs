//! devready - Development environment readiness checks.
//!
//! devready answers whether the toolchains and installed dependencies a
//! React Native workspace needs are present: Node.js, the project's
//! `node_modules`, Android Studio, Xcode, CocoaPods and the installed pods.
//! Results are reported per dependency, either from the CLI or over a
//! JSON message protocol.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging and probe resolution
//! - [`error`] - Error types and result aliases
//! - [`messaging`] - Inbound commands, outbound results and the dispatcher
//! - [`requirements`] - Dependencies, probes and the verification engine
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//! - [`workspace`] - Workspace resolution and filesystem checks
//!
//! # Example
//!
//! ```
//! use devready::requirements::{CheckResult, Dependency, ProbeOutcome};
//!
//! let result = CheckResult::for_dependency(
//!     Dependency::NodeModules,
//!     &ProbeOutcome::absent("npm ls exited with 1"),
//! );
//! assert!(!result.is_installed());
//! assert_eq!(result.error(), Some("Node modules are not installed."));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod messaging;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod workspace;

pub use error::{DevreadyError, Result};
