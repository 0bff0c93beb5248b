//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `wayfind-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Discovery, reads, atomic writes
//!   - `FormatEngine`: Config resolution, parser inference, formatting
//!   - `FormatObserver`: Per-file progress events
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{FileInfo, Filesystem, FormatEngine, FormatObserver, NoopObserver};

#[cfg(test)]
pub use output::{MockFilesystem, MockFormatEngine};
