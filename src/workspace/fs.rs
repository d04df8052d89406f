//! Filesystem-existence primitive.

use async_trait::async_trait;
use std::path::Path;

/// Answers whether a path exists.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether `path` exists, as a file or a directory.
    async fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by the real filesystem.
///
/// Errors while querying metadata (permissions, broken symlinks) count as
/// the path being absent.
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new filesystem handle.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for StdFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
