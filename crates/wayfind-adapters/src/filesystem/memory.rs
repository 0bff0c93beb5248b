//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use wayfind_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::CandidatePatterns,
    error::{WayfindError, WayfindResult},
};

use super::local::build_matcher;

/// In-memory filesystem for testing.
///
/// Applies the same candidate patterns, hidden-entry and ignored-directory
/// rules as [`super::LocalFilesystem`]. `.gitignore` files are stored like
/// any other file but not interpreted.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    failing_writes: HashSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
    }

    /// Make every later write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Paths written so far, in write order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }

    fn lock_error() -> WayfindError {
        WayfindError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

impl Filesystem for MemoryFilesystem {
    /// Directories are implied by the files stored below them.
    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| {
                inner
                    .files
                    .keys()
                    .any(|p| p != path && p.starts_with(path))
            })
            .unwrap_or(false)
    }

    fn candidates(
        &self,
        root: &Path,
        targets: &[PathBuf],
        patterns: &CandidatePatterns,
    ) -> WayfindResult<Vec<PathBuf>> {
        let matcher = build_matcher(patterns)?;
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        let scan_roots = if targets.is_empty() {
            vec![root.to_path_buf()]
        } else {
            targets.to_vec()
        };

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for target in scan_roots {
            if inner.files.contains_key(&target) {
                if seen.insert(target.clone()) {
                    found.push(target);
                }
                continue;
            }

            let mut any = false;
            for path in inner.files.keys().filter(|p| p.starts_with(&target)) {
                any = true;
                let Ok(below_target) = path.strip_prefix(&target) else {
                    continue;
                };
                let relative = path.strip_prefix(root).unwrap_or(path);
                if is_hidden(below_target)
                    || patterns.is_in_ignored_dir(below_target)
                    || !matcher.is_match(relative)
                {
                    continue;
                }
                if seen.insert(path.clone()) {
                    found.push(path.clone());
                }
            }
            if !any {
                return Err(ApplicationError::DiscoveryFailed {
                    path: target,
                    reason: "no such file or directory".into(),
                }
                .into());
            }
        }
        Ok(found)
    }

    fn read_to_string(&self, path: &Path) -> WayfindResult<String> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> WayfindResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        if inner.failing_writes.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to replace file: simulated write failure".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes.push(path.to_path_buf());
        Ok(())
    }
}
