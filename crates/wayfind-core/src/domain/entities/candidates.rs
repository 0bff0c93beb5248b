use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Extension globs every scan looks for.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "**/*.js",
    "**/*.cjs",
    "**/*.mjs",
    "**/*.json",
    "**/*.css",
    "**/*.scss",
    "**/*.html",
    "**/*.md",
    "**/*.yml",
    "**/*.yaml",
    "**/*.php",
];

/// Directory names never descended into, at any depth.
pub const ALWAYS_IGNORED_DIRS: &[&str] = &["node_modules", "dist", "coverage"];

/// What a directory scan treats as a candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePatterns {
    patterns: Vec<String>,
    ignored_dirs: Vec<String>,
}

impl Default for CandidatePatterns {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            ignored_dirs: ALWAYS_IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl CandidatePatterns {
    /// Add directory names to skip on top of the built-in ones.
    pub fn with_ignored_dirs<I, S>(mut self, dirs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if dir.is_empty() || dir.contains(['/', '\\']) {
                return Err(DomainError::InvalidPattern {
                    pattern: dir,
                    reason: "ignored directories are plain names, not paths".into(),
                });
            }
            if !self.ignored_dirs.contains(&dir) {
                self.ignored_dirs.push(dir);
            }
        }
        Ok(self)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn ignored_dirs(&self) -> &[String] {
        &self.ignored_dirs
    }

    /// `true` if any component of `relative` is an always-ignored directory.
    pub fn is_in_ignored_dir(&self, relative: &Path) -> bool {
        let parent = relative.parent().unwrap_or(Path::new(""));
        parent.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|name| self.is_ignored_dir_name(name))
        })
    }

    pub fn is_ignored_dir_name(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }
}
