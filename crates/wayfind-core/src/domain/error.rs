// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they are copied into per-file outcomes)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid value for '{option}': {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    #[error("unknown parser '{0}'")]
    UnknownParser(String),

    #[error("invalid candidate pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("path '{path}' is outside the project root '{root}'")]
    OutsideRoot { path: String, root: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption { option, .. } => vec![
                format!("Check the '{option}' entry of your formatter config"),
                "Supported keys: printWidth, tabWidth, useTabs, semi, singleQuote, endOfLine"
                    .into(),
            ],
            Self::UnknownParser(name) => vec![
                format!("'{name}' is not a known parser"),
                "Known parsers: babel, json, css, scss, html, markdown, yaml, php".into(),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("Fix the glob '{pattern}'"),
                "Globs use the gitignore/globset syntax, e.g. **/*.js".into(),
            ],
            Self::OutsideRoot { root, .. } => vec![
                format!("Only paths below {root} can be formatted"),
                "Run wayfind from the project root or pass --root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOption { .. } | Self::UnknownParser(_) | Self::InvalidPattern { .. } => {
                ErrorCategory::Validation
            }
            Self::OutsideRoot { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
