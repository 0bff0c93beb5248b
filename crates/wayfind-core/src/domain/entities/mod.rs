pub mod candidates;
pub mod file_record;
pub mod format_options;
pub mod run_summary;

pub use crate::domain::DomainError;
pub use candidates::CandidatePatterns;
pub use file_record::{FileOutcome, FileRecord, FileStatus};
pub use format_options::{FormatOptions, OptionsLayer};
pub use run_summary::{RunReport, RunSummary};
