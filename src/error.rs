//! Error types and handling for the PDF sweeper
//! Author: kartik4091

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for sweep operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for sweep operations.
///
/// A corrupt PDF is not an error: the validator reports it as
/// [`Validity::Corrupt`](crate::types::Validity::Corrupt). Everything in
/// here aborts the run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Traversal error under {root}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("PDF library error for {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete {path}: {source}")]
    Removal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl Error {
    /// Helper for wrapping an I/O failure tied to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    #[error("Failed to write console notice: {0}")]
    Console(#[source] io::Error),

    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
