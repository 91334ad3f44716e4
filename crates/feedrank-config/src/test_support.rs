//! Directory trees with `.feedrank.toml` files for discovery tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree, removed on drop.
pub struct ConfigTree {
    /// Backing directory.
    root: TempDir,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// The tree root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` (and its parents) under the root. An empty `rel` is the root.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a config with an empty `[feed]` table into `rel`.
    pub fn config(&self, rel: &str) -> PathBuf {
        self.config_with(rel, "[feed]\n")
    }

    /// Writes a config with the given contents into `rel`.
    pub fn config_with(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a `root = true` config into `rel`.
    pub fn root_config(&self, rel: &str) -> PathBuf {
        self.config_with(rel, "root = true\n")
    }
}
