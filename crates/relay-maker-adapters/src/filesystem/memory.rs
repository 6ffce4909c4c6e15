//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use relay_maker_core::{
    application::{ApplicationError, Filesystem},
    error::MakerResult,
};

/// In-memory filesystem for testing. Only directories are modelled.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a directory (testing helper).
    pub fn with_dir(self, path: impl AsRef<Path>) -> MakerResult<Self> {
        self.create_dir_all(path.as_ref())?;
        Ok(self)
    }

    /// List all directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<_> = self
            .inner
            .read()
            .map(|d| d.iter().cloned().collect())
            .unwrap_or_default();
        dirs.sort();
        dirs
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> MakerResult<()> {
        let mut dirs = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            dirs.insert(current.clone());
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|dirs| dirs.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> MakerResult<()> {
        let mut dirs = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }
}
