//! Message-driven access to the verification engine.
//!
//! A consumer sends `check*Installed` commands over a [`MessageChannel`];
//! the [`Dispatcher`] runs the matching check and the [`ResultReporter`]
//! posts one `is*Installed` message back per command.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use devready::config::ProbeConfig;
//! use devready::messaging::{Dispatcher, LocalChannel};
//! use devready::requirements::{Dependency, VerificationEngine};
//! use devready::shell::MockRunner;
//! use devready::workspace::{ProjectWorkspace, StdFileSystem};
//!
//! let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build().unwrap();
//! rt.block_on(async {
//!     let engine = Arc::new(VerificationEngine::new(
//!         ProbeConfig::default(),
//!         Arc::new(MockRunner::new().with_output("pod --version", "1.15.2\n")),
//!         Arc::new(StdFileSystem::new()),
//!         Arc::new(ProjectWorkspace::detached()),
//!     ));
//!     let (channel, mut outbound) = LocalChannel::new();
//!     let channel = Arc::new(channel);
//!     let dispatcher = Dispatcher::setup(engine, channel.clone());
//!
//!     channel.send(serde_json::json!({"command": "checkCocoaPodsInstalled"}));
//!     let message = outbound.recv().await.unwrap();
//!     assert_eq!(message.dependency(), Dependency::CocoaPods);
//!     assert!(message.result().is_installed());
//!
//!     dispatcher.dispose().await;
//! });
//! ```

pub mod channel;
pub mod dispatcher;
pub mod message;
pub mod reporter;

pub use channel::{LocalChannel, MessageChannel, Subscription};
pub use dispatcher::{Dispatcher, DispatcherOptions};
pub use message::{InboundCommand, OutboundMessage};
pub use reporter::ResultReporter;
