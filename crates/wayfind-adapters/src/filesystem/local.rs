//! Local filesystem adapter: `ignore`-crate discovery, std reads, atomic writes.

use std::collections::HashSet;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use wayfind_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CandidatePatterns, DomainError},
    error::{WayfindError, WayfindResult},
};

/// Production filesystem implementation.
///
/// Discovery honours `.gitignore` files (inside or outside a git checkout),
/// skips hidden entries and never descends into the always-ignored
/// directories. Entries come back sorted by file name within each directory.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    fn walk(
        &self,
        root: &Path,
        dir: &Path,
        patterns: &CandidatePatterns,
        matcher: &GlobSet,
    ) -> Vec<PathBuf> {
        let filter_patterns = patterns.clone();
        let mut builder = WalkBuilder::new(dir);
        builder
            .hidden(true)
            .parents(true)
            .ignore(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| filter_patterns.is_ignored_dir_name(name)))
            });

        let mut found = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if matcher.is_match(relative) {
                found.push(path.to_path_buf());
            }
        }
        found
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn candidates(
        &self,
        root: &Path,
        targets: &[PathBuf],
        patterns: &CandidatePatterns,
    ) -> WayfindResult<Vec<PathBuf>> {
        let matcher = build_matcher(patterns)?;
        let scan_roots = if targets.is_empty() {
            vec![root.to_path_buf()]
        } else {
            targets.to_vec()
        };

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for target in scan_roots {
            if target.is_file() {
                if seen.insert(target.clone()) {
                    candidates.push(target);
                }
                continue;
            }
            if !target.is_dir() {
                return Err(ApplicationError::DiscoveryFailed {
                    path: target,
                    reason: "no such file or directory".into(),
                }
                .into());
            }
            for path in self.walk(root, &target, patterns, &matcher) {
                if seen.insert(path.clone()) {
                    candidates.push(path);
                }
            }
        }

        debug!(count = candidates.len(), root = %root.display(), "Scan finished");
        Ok(candidates)
    }

    fn read_to_string(&self, path: &Path) -> WayfindResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_atomic(&self, path: &Path, content: &str) -> WayfindResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut tmp = tempfile::Builder::new()
            .prefix(".wayfind-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| map_io_error(path, e, "create temporary file"))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "write temporary file"))?;

        // Keep the original mode bits (e.g. executable scripts).
        if let Ok(metadata) = std::fs::metadata(path) {
            std::fs::set_permissions(tmp.path(), metadata.permissions())
                .map_err(|e| map_io_error(path, e, "copy permissions"))?;
        }

        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }
}

/// Compile the candidate globs into one matcher.
pub(crate) fn build_matcher(patterns: &CandidatePatterns) -> WayfindResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.patterns() {
        let glob = Glob::new(pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| {
        DomainError::InvalidPattern {
            pattern: patterns.patterns().join(", "),
            reason: e.to_string(),
        }
        .into()
    })
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> WayfindError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
