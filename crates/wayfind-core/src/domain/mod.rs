// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Wayfind.
//!
//! This module contains pure formatting-run logic with no I/O. Reading files,
//! resolving config files and calling formatting libraries all happen behind
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or process calls
//! - **No heavy crates**: Only std library + thiserror + serde
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    CandidatePatterns, FileOutcome, FileRecord, FileStatus, FormatOptions, OptionsLayer,
    RunReport, RunSummary,
    candidates::{ALWAYS_IGNORED_DIRS, DEFAULT_PATTERNS},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{EndOfLine, Parser, RunMode, SkipReason};

pub use validation::DomainValidator;
