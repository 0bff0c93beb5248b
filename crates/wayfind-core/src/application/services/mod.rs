//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "format this project".

pub mod format_service;

pub use format_service::{FormatRequest, FormatService};
