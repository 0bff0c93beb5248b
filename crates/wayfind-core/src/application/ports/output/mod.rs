//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wayfind-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{CandidatePatterns, FileOutcome, FormatOptions, Parser, SkipReason};
use crate::error::WayfindResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wayfind_adapters::filesystem::LocalFilesystem` (production)
/// - `wayfind_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List candidate files under `root`, in scan order.
    ///
    /// With no `targets` the whole root is scanned. Directory targets are
    /// scanned the same way; file targets are returned as-is, whatever their
    /// extension.
    fn candidates(
        &self,
        root: &Path,
        targets: &[PathBuf],
        patterns: &CandidatePatterns,
    ) -> WayfindResult<Vec<PathBuf>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> WayfindResult<String>;

    /// Replace a file's content. Either the new content is fully in place
    /// afterwards or the old content is untouched.
    fn write_atomic(&self, path: &Path, content: &str) -> WayfindResult<()>;
}

/// What the engine knows about a path before formatting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub ignored: bool,
    pub parser: Option<Parser>,
}

impl FileInfo {
    /// The parser to use, or why the file must be skipped.
    pub fn parser_or_skip(&self) -> Result<Parser, SkipReason> {
        if self.ignored {
            return Err(SkipReason::Ignored);
        }
        self.parser.ok_or(SkipReason::NoParser)
    }
}

/// Port for the external formatting libraries.
///
/// Implemented by:
/// - `wayfind_adapters::engine::PluginEngine` (language plugins)
///
/// ## Design Notes
///
/// - The engine is the only place that knows which libraries exist
/// - Config lookup lives here too, since it is part of what the library
///   would normally decide for a file path
#[cfg_attr(test, mockall::automock)]
pub trait FormatEngine: Send + Sync {
    /// Merge every config source that applies to `path`.
    fn resolve_options(&self, path: &Path) -> WayfindResult<FormatOptions>;

    /// Decide whether `path` is ignored and which parser would handle it.
    fn file_info(&self, path: &Path, ignore_path: &Path) -> WayfindResult<FileInfo>;

    /// Format `source`; errors on input the parser cannot handle.
    fn format(
        &self,
        path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> WayfindResult<String>;
}

/// Port for progress reporting.
///
/// Called once per candidate, in processing order.
pub trait FormatObserver {
    fn file_processed(&self, outcome: &FileOutcome);
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FormatObserver for NoopObserver {
    fn file_processed(&self, _outcome: &FileOutcome) {}
}
