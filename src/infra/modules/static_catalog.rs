// A compile-time module table. Handlers are registered under the path the
// loaders will ask for, e.g. `commands/client/ping.rs`.

use crate::core::loading::{LoadError, ModuleLoader};
use std::collections::HashMap;
use std::sync::Arc;

pub struct StaticModuleCatalog<T: ?Sized> {
    modules: HashMap<String, Arc<T>>,
}

impl<T: ?Sized> Default for StaticModuleCatalog<T> {
    fn default() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }
}

impl<T: ?Sized> StaticModuleCatalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the handler living at `module_path`.
    pub fn register(&mut self, module_path: &str, handler: Arc<T>) -> &mut Self {
        self.modules.insert(normalize(module_path), handler);
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<T: ?Sized + Send + Sync> ModuleLoader<T> for StaticModuleCatalog<T> {
    fn load(&self, module_path: &str) -> Result<Arc<T>, LoadError> {
        self.modules
            .get(&normalize(module_path))
            .cloned()
            .ok_or_else(|| LoadError::ModuleNotFound(module_path.to_string()))
    }
}

/// `./a\b.rs` and `a/b.rs` name the same module.
fn normalize(module_path: &str) -> String {
    let unified = module_path.replace('\\', "/");
    unified
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}
