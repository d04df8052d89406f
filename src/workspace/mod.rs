//! Workspace and filesystem collaborators.
//!
//! # Modules
//!
//! - [`fs`] - Filesystem-existence primitive
//! - [`resolver`] - Workspace root and native source directory resolution

pub mod fs;
pub mod resolver;

pub use fs::{FileSystem, StdFileSystem};
pub use resolver::{find_workspace_root, ProjectWorkspace, WorkspaceResolver};
