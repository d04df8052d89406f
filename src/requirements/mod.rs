//! Dependency verification.
//!
//! This module answers whether the toolchains and installed artifacts a
//! React Native workspace needs are present.
//!
//! # Modules
//!
//! - [`registry`] - The fixed set of dependencies and their static texts
//! - [`probe`] - Command and filesystem probes, and their AND composition
//! - [`status`] - Probe outcomes and the reported check result
//! - [`checker`] - The verification engine
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use devready::config::ProbeConfig;
//! use devready::requirements::{Dependency, VerificationEngine};
//! use devready::shell::MockRunner;
//! use devready::workspace::{ProjectWorkspace, StdFileSystem};
//!
//! let engine = VerificationEngine::new(
//!     ProbeConfig::default(),
//!     Arc::new(MockRunner::new().with_output("node --version", "v20.11.0\n")),
//!     Arc::new(StdFileSystem::new()),
//!     Arc::new(ProjectWorkspace::detached()),
//! );
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let result = rt.block_on(engine.check(Dependency::Nodejs));
//! assert!(result.is_installed());
//! ```

pub mod checker;
pub mod probe;
pub mod registry;
pub mod status;

pub use checker::VerificationEngine;
pub use probe::{CompositeProbe, Probe};
pub use registry::Dependency;
pub use status::{CheckResult, ProbeOutcome};
