use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::file_record::{FileOutcome, FileStatus},
    value_objects::RunMode,
};

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub formatted: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: &FileStatus) {
        match status {
            FileStatus::Formatted => self.formatted += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Skipped { .. } => self.skipped += 1,
            FileStatus::Failed { .. } => self.failed += 1,
        }
    }

    /// Files that went through the formatter, changed or not.
    pub fn processed(&self) -> usize {
        self.formatted + self.unchanged
    }
}

/// Result of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub mode: RunMode,
    pub summary: RunSummary,
    /// Outcomes in processing (scan) order.
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(root: impl Into<PathBuf>, mode: RunMode) -> Self {
        Self {
            root: root.into(),
            mode,
            summary: RunSummary::default(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.summary.record(&outcome.status);
        self.files.push(outcome);
    }

    /// Write mode fails only on errors; check mode also fails when any file
    /// would be reformatted.
    pub fn succeeded(&self) -> bool {
        match self.mode {
            RunMode::Write => self.summary.failed == 0,
            RunMode::Check => self.summary.failed == 0 && self.summary.formatted == 0,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.status.is_failed())
    }
}
