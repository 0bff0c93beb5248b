//! Application layer errors.
//!
//! These errors represent failures while orchestrating a run (I/O, config
//! files, formatting libraries), not domain rule violations. Domain errors
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The directory to format does not exist.
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Walking the project tree failed.
    #[error("Failed to scan {path}: {reason}")]
    DiscoveryFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A config file (formatter rc, editorconfig, ignore file) is malformed.
    #[error("Invalid configuration in {path}: {reason}")]
    ConfigResolution { path: PathBuf, reason: String },

    /// The formatting library rejected the input.
    #[error("Failed to format as {parser}: {reason}")]
    FormattingFailed { parser: String, reason: String },

    /// An external formatter command could not run or exited non-zero.
    #[error("External formatter '{command}' failed: {reason}")]
    ExternalCommand { command: String, reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootNotFound { path } => vec![
                format!("Directory does not exist: {}", path.display()),
                "Run wayfind from inside your project or pass a valid path".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::ConfigResolution { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "Formatter config files must be valid JSON or TOML".into(),
            ],
            Self::FormattingFailed { .. } => vec![
                "The file could not be parsed; fix the syntax error and re-run".into(),
            ],
            Self::ExternalCommand { command, .. } => vec![
                format!("Ensure '{command}' is installed and in your PATH"),
                "Check the [plugins] section of your wayfind config".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootNotFound { .. } => ErrorCategory::NotFound,
            Self::DiscoveryFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ConfigResolution { .. } => ErrorCategory::Configuration,
            Self::FormattingFailed { .. } => ErrorCategory::Validation,
            Self::ExternalCommand { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
