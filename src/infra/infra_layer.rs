// The infra module contains implementations of core traits.

#[path = "filesystem/os_fs.rs"]
pub mod filesystem;

#[path = "modules/static_catalog.rs"]
pub mod modules;

#[path = "config/env_config.rs"]
pub mod config;

pub use config::{BotConfig, ConfigError};
pub use filesystem::OsFileSystem;
pub use modules::StaticModuleCatalog;
