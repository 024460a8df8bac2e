// Ports used by the command and event loaders.
//
// The core never touches the disk or a module table directly. It asks a
// `FileSystem` what a directory contains and a `ModuleLoader` for the handler
// living at a module path. The infra layer provides the real implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported file structure: {0} contains a nested directory")]
    UnsupportedStructure(PathBuf),

    #[error("Package command {dir} has no entry file {entry}")]
    MissingEntryFile { dir: PathBuf, entry: String },

    #[error("Module not found: {0}")]
    ModuleNotFound(String),
}

impl LoadError {
    /// True when this is a "no such directory" failure for exactly `dir`.
    pub fn is_missing_directory(&self, dir: &Path) -> bool {
        match self {
            LoadError::Scan { path, source } => {
                source.kind() == io::ErrorKind::NotFound && path == dir
            }
            _ => false,
        }
    }
}

// ============================================================================
// PORTS
// ============================================================================

/// Read-only view of a directory tree.
pub trait FileSystem: Send + Sync {
    /// Names of the immediate entries of `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    fn exists(&self, path: &Path) -> bool;
}

/// Resolves a module path to the handler compiled under it.
///
/// `T` is usually a trait object such as `dyn CommandHandler<M>`.
pub trait ModuleLoader<T: ?Sized>: Send + Sync {
    fn load(&self, module_path: &str) -> Result<Arc<T>, LoadError>;
}

/// Joins module path segments with `/`, skipping empty ones.
pub fn join_module_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
