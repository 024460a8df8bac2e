pub mod loading_ports;
pub mod module_scan;

pub use loading_ports::{join_module_path, FileSystem, LoadError, ModuleLoader};
pub use module_scan::{handler_name, DirectoryListing, ModuleScanner, DEFAULT_MODULE_EXTENSION};
