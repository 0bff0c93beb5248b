//! Application layer for Wayfind.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FormatService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. Classification and counting live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FormatRequest, FormatService};

// Re-export port traits (for adapter implementation)
pub use ports::{FileInfo, Filesystem, FormatEngine, FormatObserver, NoopObserver};

pub use error::ApplicationError;
