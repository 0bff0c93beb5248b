//! Wayfind Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Wayfind
//! batch formatter, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           wayfind-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (FormatService)              │
//! │         Orchestrates the batch          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, FormatEngine, Observer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wayfind-adapters (Infrastructure)    │
//! │   (LocalFilesystem, PluginEngine, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FileRecord, RunReport, FormatOptions)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wayfind_core::application::{FormatRequest, FormatService, NoopObserver};
//!
//! // Adapters come from wayfind-adapters.
//! let service = FormatService::new(filesystem, engine);
//! let report = service.run(&FormatRequest::new("."), &NoopObserver)?;
//! std::process::exit(if report.succeeded() { 0 } else { 1 });
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormatRequest, FormatService,
        ports::{FileInfo, Filesystem, FormatEngine, FormatObserver, NoopObserver},
    };
    pub use crate::domain::{
        CandidatePatterns, EndOfLine, FileOutcome, FileStatus, FormatOptions, OptionsLayer,
        Parser, RunMode, RunReport, RunSummary, SkipReason,
    };
    pub use crate::error::{WayfindError, WayfindResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
