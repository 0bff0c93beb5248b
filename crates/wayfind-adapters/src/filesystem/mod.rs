//! Filesystem adapters: candidate discovery, reads and atomic writes.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
