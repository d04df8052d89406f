//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::requirements::Dependency;

/// devready - Verify that a workspace's development toolchain is installed.
#[derive(Debug, Parser)]
#[command(name = "devready")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to an extra config file, merged last
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check dependencies (default if no command specified)
    Check(CheckArgs),

    /// Answer check commands as JSON lines over stdin/stdout
    Serve,

    /// List the dependencies and their protocol commands
    List,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Dependencies to check (all if omitted)
    #[arg(value_enum)]
    pub dependencies: Vec<Dependency>,

    /// Print one result message per line as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// The dependencies to check, defaulting to all of them.
    pub fn selected(&self) -> Vec<Dependency> {
        if self.dependencies.is_empty() {
            return Dependency::ALL.to_vec();
        }

        let mut selected = self.dependencies.clone();
        selected.sort();
        selected.dedup();
        selected
    }
}
