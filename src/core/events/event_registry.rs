// Discovers event listeners in a flat directory and hands each one to a
// registration callback. The registry keeps nothing after the pass.

use crate::core::commands::Error;
use crate::core::loading::{
    handler_name, join_module_path, FileSystem, LoadError, ModuleLoader, ModuleScanner,
    DEFAULT_MODULE_EXTENSION,
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// A listener invoked by the host's event dispatch.
#[async_trait]
pub trait EventListener<A>: Send + Sync
where
    A: Send + Sync,
{
    async fn call(&self, args: &A) -> Result<(), Error>;
}

pub struct EventRegistry<T: ?Sized> {
    events_root: PathBuf,
    module_root: String,
    scanner: ModuleScanner,
    loader: Arc<dyn ModuleLoader<T>>,
}

impl<T: ?Sized> EventRegistry<T> {
    pub fn new(
        events_root: impl Into<PathBuf>,
        module_root: impl Into<String>,
        file_system: Arc<dyn FileSystem>,
        loader: Arc<dyn ModuleLoader<T>>,
    ) -> Self {
        Self {
            events_root: events_root.into(),
            module_root: module_root.into(),
            scanner: ModuleScanner::new(file_system, DEFAULT_MODULE_EXTENSION),
            loader,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.scanner = ModuleScanner::new(self.scanner.file_system(), extension);
        self
    }

    /// Loads every listener file and passes it to `register` under the file's
    /// name up to the first `.`. Subdirectories are ignored.
    ///
    /// Returns how many listeners were registered.
    pub fn load_all_events<F>(&self, mut register: F) -> Result<usize, LoadError>
    where
        F: FnMut(&str, Arc<T>),
    {
        let listing = self.scanner.parse_directory(&self.events_root)?;

        for file_name in &listing.module_files {
            let module_path = join_module_path(&[&self.module_root, file_name]);
            let listener = self.loader.load(&module_path)?;
            let event_name = handler_name(file_name);
            tracing::debug!(event = event_name, module = %module_path, "Registered event listener");
            register(event_name, listener);
        }

        tracing::info!(count = listing.module_files.len(), "Loaded events");
        Ok(listing.module_files.len())
    }
}
