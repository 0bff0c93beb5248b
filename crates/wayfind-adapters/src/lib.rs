//! Infrastructure adapters for Wayfind.
//!
//! This crate implements the ports defined in `wayfind-core::application::ports`.
//! It contains all external dependencies and I/O operations: directory
//! walking, config file lookup, ignore files and the formatting libraries.

pub mod config_resolver;
pub mod engine;
pub mod filesystem;
pub mod ignore_file;

// Re-export commonly used adapters
pub use config_resolver::ConfigResolver;
pub use engine::{PluginEngine, PluginEngineBuilder};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use ignore_file::IgnoreFile;
