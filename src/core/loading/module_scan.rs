// Directory scanning shared by the command and event loaders.

use super::loading_ports::{FileSystem, LoadError};
use std::path::Path;
use std::sync::Arc;

/// Extension of handler files when the caller does not pick one.
pub const DEFAULT_MODULE_EXTENSION: &str = "rs";

/// The immediate contents of one scanned directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Entries carrying the module extension, in listing order.
    pub module_files: Vec<String>,
    /// Entries without any extension. These are treated as directories.
    pub sub_dirs: Vec<String>,
}

/// Splits directory listings into handler files and subdirectories.
#[derive(Clone)]
pub struct ModuleScanner {
    fs: Arc<dyn FileSystem>,
    extension: String,
}

impl ModuleScanner {
    pub fn new(fs: Arc<dyn FileSystem>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            fs,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file_system(&self) -> Arc<dyn FileSystem> {
        Arc::clone(&self.fs)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    /// Lists `dir`, keeping the order the file system reports.
    ///
    /// Files with a foreign extension are dropped. Anything without an
    /// extension lands in `sub_dirs`, whether or not it really is a directory;
    /// scanning it later surfaces the problem.
    pub fn parse_directory(&self, dir: &Path) -> Result<DirectoryListing, LoadError> {
        let entries = self.fs.read_dir(dir).map_err(|source| LoadError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut listing = DirectoryListing::default();
        for name in entries {
            match Path::new(&name).extension() {
                Some(ext) if ext == self.extension.as_str() => listing.module_files.push(name),
                Some(_) => {}
                None => listing.sub_dirs.push(name),
            }
        }

        Ok(listing)
    }

    /// `<sub_dir>.<ext>`, the canonical entry file of a package directory.
    pub fn entry_file_name(&self, sub_dir: &str) -> String {
        format!("{}.{}", sub_dir, self.extension)
    }
}

/// Handler name for a file: everything before the first `.`.
pub fn handler_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
