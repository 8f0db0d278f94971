//! Filesystem-backed object store

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::ObjectStore;

/// Stores objects as files under a root directory, creating intermediate
/// directories for `/`-separated object names.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path an object name maps to
    pub fn object_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ObjectStore for FsStore {
    fn put(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.object_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write object: {}", path.display()))?;
        Ok(())
    }
}
