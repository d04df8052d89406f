//! Workspace path resolution.
//!
//! The workspace root is the directory holding the project's
//! `package.json`. The iOS source directory lives underneath it (`ios/` by
//! default) and only resolves when it actually exists.

use std::path::{Path, PathBuf};

/// Resolves the directories the checks run against.
pub trait WorkspaceResolver: Send + Sync {
    /// The workspace root, if one is open.
    fn workspace_root(&self) -> Option<PathBuf>;

    /// The native iOS project directory under `root`, if there is one.
    fn ios_source_dir(&self, root: &Path) -> Option<PathBuf>;
}

/// A workspace rooted at a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectWorkspace {
    root: Option<PathBuf>,
    ios_dir: PathBuf,
}

impl ProjectWorkspace {
    /// Create a workspace resolver for `root`.
    ///
    /// `ios_dir` is relative to the root unless absolute.
    pub fn new(root: Option<PathBuf>, ios_dir: impl Into<PathBuf>) -> Self {
        Self {
            root,
            ios_dir: ios_dir.into(),
        }
    }

    /// A resolver with no workspace open.
    pub fn detached() -> Self {
        Self::new(None, "ios")
    }
}

impl WorkspaceResolver for ProjectWorkspace {
    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn ios_source_dir(&self, root: &Path) -> Option<PathBuf> {
        let dir = root.join(&self.ios_dir);
        if dir.is_dir() {
            Some(dir)
        } else {
            None
        }
    }
}

/// Find the workspace root by walking up from `start`.
///
/// Returns the nearest directory containing a `package.json`.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join("package.json").is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}
