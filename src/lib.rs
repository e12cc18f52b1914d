//! Main Library File for the PDF sweeper
//! Scans a directory tree for PDFs, deletes the ones that cannot be opened
//! or have no pages, and flags file names containing uppercase letters.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage 0: Locate candidates
pub mod scanner;

// Stage 1: Open each candidate through lopdf
pub mod verification;

// Stage 2: Delete what failed
pub mod cleaner;

// Stage 3: Run summary
pub mod report;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use cleaner::{DryRunRemover, FsRemover, Remover};
pub use config::SweepConfig;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use report::{ReportFormat, ReportFormatter, SweepReport};
pub use scanner::{scan, PathScanner};
pub use types::{CandidateFile, Validity};
pub use utils::{basename, exists, has_uppercase};
pub use verification::{is_valid, validate};
