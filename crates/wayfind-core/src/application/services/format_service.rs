//! Format Service - the batch formatting orchestrator.
//!
//! This service coordinates one formatting run:
//! 1. Discover candidate files
//! 2. For each file: resolve config, classify, read, format, write back
//! 3. Tally outcomes into a [`RunReport`]
//!
//! Every per-file error is contained at the file boundary; only discovery
//! and request validation can fail the whole call.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, FormatEngine, FormatObserver},
    },
    domain::{
        CandidatePatterns, DomainValidator as validator, FileOutcome, FileRecord, FileStatus,
        RunMode, RunReport,
    },
    error::WayfindResult,
};

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    /// Directory the run is anchored at; outcomes are reported relative to it.
    pub root: PathBuf,
    /// Explicit files or directories; empty means "the whole root".
    pub targets: Vec<PathBuf>,
    /// Ignore file consulted for every candidate.
    pub ignore_path: PathBuf,
    pub mode: RunMode,
    pub patterns: CandidatePatterns,
}

impl FormatRequest {
    pub const DEFAULT_IGNORE_FILE: &'static str = ".prettierignore";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            ignore_path: root.join(Self::DEFAULT_IGNORE_FILE),
            root,
            targets: Vec::new(),
            mode: RunMode::Write,
            patterns: CandidatePatterns::default(),
        }
    }

    pub fn with_targets(mut self, targets: Vec<PathBuf>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ignore_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_path = path.into();
        self
    }

    pub fn with_patterns(mut self, patterns: CandidatePatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// `path` relative to the root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Batch formatting service.
///
/// Sequential by design of the run model: one file at a time, in scan order.
pub struct FormatService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn FormatEngine>,
}

impl FormatService {
    /// Create a new format service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, engine: Box<dyn FormatEngine>) -> Self {
        Self { filesystem, engine }
    }

    /// Run the batch.
    ///
    /// Returns `Err` only when the run cannot start (bad root, bad targets,
    /// scan failure). File-level problems end up in the report.
    #[instrument(
        skip_all,
        fields(
            run_id = %Uuid::new_v4(),
            root = %request.root.display(),
            mode = %request.mode
        )
    )]
    pub fn run(
        &self,
        request: &FormatRequest,
        observer: &dyn FormatObserver,
    ) -> WayfindResult<RunReport> {
        if !self.filesystem.is_dir(&request.root) {
            return Err(ApplicationError::RootNotFound {
                path: request.root.clone(),
            }
            .into());
        }
        for target in &request.targets {
            validator::validate_target(&request.root, target)?;
        }

        let candidates =
            self.filesystem
                .candidates(&request.root, &request.targets, &request.patterns)?;
        info!(candidates = candidates.len(), "Candidates discovered");

        let mut report = RunReport::new(&request.root, request.mode);
        for path in &candidates {
            let status = self.process_file(path, request);
            let outcome = FileOutcome::new(request.relative(path), status);
            observer.file_processed(&outcome);
            report.push(outcome);
        }

        info!(
            formatted = report.summary.formatted,
            unchanged = report.summary.unchanged,
            skipped = report.summary.skipped,
            failed = report.summary.failed,
            "Run complete"
        );
        Ok(report)
    }

    /// Classify one file; never propagates an error.
    fn process_file(&self, path: &Path, request: &FormatRequest) -> FileStatus {
        match self.try_process_file(path, request) {
            Ok(status) => {
                debug!(path = %request.relative(path).display(), ?status, "File processed");
                status
            }
            Err(e) => {
                warn!(
                    path = %request.relative(path).display(),
                    error = %e,
                    "Formatting failed"
                );
                FileStatus::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    fn try_process_file(&self, path: &Path, request: &FormatRequest) -> WayfindResult<FileStatus> {
        // 1. Resolve configuration
        let options = self.engine.resolve_options(path)?;
        validator::validate_options(&options)?;

        // 2. Recognition; skipped files are never read
        let parser = match self
            .engine
            .file_info(path, &request.ignore_path)?
            .parser_or_skip()
        {
            Ok(parser) => parser,
            Err(reason) => return Ok(FileStatus::Skipped { reason }),
        };

        // 3. Read
        let record = FileRecord::new(path, self.filesystem.read_to_string(path)?);

        // 4. Format
        let formatted = self
            .engine
            .format(path, record.original(), parser, &options)?;
        let record = record.with_formatted(formatted);

        // 5. Write back if changed
        match record.formatted() {
            Some(text) if record.is_changed() => {
                if request.mode.writes() {
                    self.filesystem.write_atomic(path, text)?;
                }
                Ok(FileStatus::Formatted)
            }
            _ => Ok(FileStatus::Unchanged),
        }
    }
}
