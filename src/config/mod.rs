//! Configuration loading and resolution for devready.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, layering and loading in [`loader`]
//! - Resolution into engine settings in [`probe`]
//!
//! # Example
//!
//! ```
//! use devready::config::{load_config, ProbeConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".devready");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("config.yml"), "commands:\n  package_list: yarn list").unwrap();
//!
//! let config = load_config(Some(temp.path()), None).unwrap();
//! let probes = ProbeConfig::resolve(&config);
//! assert_eq!(probes.commands.package_list, "yarn list");
//! ```

pub mod loader;
pub mod probe;
pub mod schema;

pub use loader::{deep_merge, load_config, load_config_from, load_config_value, ConfigPaths};
pub use probe::ProbeConfig;
pub use schema::{AndroidConfig, CommandsConfig, DevreadyConfig, IosConfig};
