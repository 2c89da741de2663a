//! files
//!
//! The local file tree that holds pulled document bodies.
//!
//! # Design
//!
//! A [`FileTree`] is rooted at the pull/push directory. All operations
//! take paths relative to the root; `write` and `rename` create any
//! missing parent directories, since a document's category path becomes
//! nested directories on disk.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from file tree operations.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to rename '{from}' to '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// A file tree rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileTree {
    root: PathBuf,
}

impl FileTree {
    /// Create a tree rooted at `root`. The directory itself is created
    /// lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a relative entry.
    pub fn abs_path(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    /// Read a file's contents as UTF-8 text.
    pub fn read(&self, rel: &Path) -> Result<String, FileError> {
        let path = self.abs_path(rel);
        fs::read_to_string(&path).map_err(|e| FileError::Read { path, source: e })
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, rel: &Path, contents: &str) -> Result<(), FileError> {
        let path = self.abs_path(rel);
        self.ensure_parent(&path)?;
        fs::write(&path, contents).map_err(|e| FileError::Write { path, source: e })
    }

    /// Rename a file, creating the destination's parent directories as
    /// needed. A rename onto itself is a no-op.
    pub fn rename(&self, from_rel: &Path, to_rel: &Path) -> Result<(), FileError> {
        if from_rel == to_rel {
            return Ok(());
        }
        let from = self.abs_path(from_rel);
        let to = self.abs_path(to_rel);
        self.ensure_parent(&to)?;
        fs::rename(&from, &to).map_err(|e| FileError::Rename {
            from,
            to,
            source: e,
        })
    }

    /// Check whether a relative entry exists.
    pub fn exists(&self, rel: &Path) -> bool {
        self.abs_path(rel).exists()
    }

    fn ensure_parent(&self, path: &Path) -> Result<(), FileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FileError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
