use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SkipReason;

/// A candidate file while it is being processed.
///
/// Holds the original text and, once formatting ran, the formatted text.
/// Records are transient: the service drops them as soon as the outcome has
/// been tallied, so no file content outlives a single iteration.
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: PathBuf,
    original: String,
    formatted: Option<String>,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, original: String) -> Self {
        Self {
            path: path.into(),
            original,
            formatted: None,
        }
    }

    pub fn with_formatted(mut self, formatted: String) -> Self {
        self.formatted = Some(formatted);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// `true` when formatted output exists and differs byte-for-byte.
    pub fn is_changed(&self) -> bool {
        self.formatted
            .as_deref()
            .is_some_and(|formatted| formatted.as_bytes() != self.original.as_bytes())
    }
}

/// Classification of one processed candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FileStatus {
    /// Content changed (written in write mode, would be written in check mode).
    Formatted,
    /// Already a fixed point of the formatter.
    Unchanged,
    Skipped { reason: SkipReason },
    Failed { message: String },
}

impl FileStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// What the outside world learns about a file: its path relative to the run
/// root and its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unformatted_record_is_not_changed() {
        let record = FileRecord::new("a.js", "x".into());
        assert!(!record.is_changed());
        assert_eq!(record.formatted(), None);
    }

    #[test]
    fn identical_output_is_not_changed() {
        let record = FileRecord::new("a.js", "x;\n".into()).with_formatted("x;\n".into());
        assert!(!record.is_changed());
    }

    #[test]
    fn different_output_is_changed() {
        let record = FileRecord::new("a.js", "x\n".into()).with_formatted("x;\n".into());
        assert!(record.is_changed());
        assert_eq!(record.original(), "x\n");
    }

    #[test]
    fn outcome_serializes_flat() {
        let outcome = FileOutcome::new(
            "c.bin",
            FileStatus::Skipped {
                reason: SkipReason::NoParser,
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "no-parser");
        assert_eq!(json["path"], "c.bin");
    }
}
