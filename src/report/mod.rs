//! Run report for the PDF sweep
//! Author: kartik4091

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::SweepConfig;
use crate::types::CandidateFile;

pub mod formatter;

pub use formatter::ReportFormatter;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

/// Everything a sweep did, in scan order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepReport {
    pub root: PathBuf,
    pub extension: String,
    pub dry_run: bool,
    pub files: Vec<CandidateFile>,
}

impl SweepReport {
    pub fn new(config: &SweepConfig) -> Self {
        Self {
            root: config.root.clone(),
            extension: config.extension.clone(),
            dry_run: config.dry_run,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, candidate: CandidateFile) {
        self.files.push(candidate);
    }

    pub fn scanned(&self) -> usize {
        self.files.len()
    }

    /// Files handed to the remover (would-be deletions in dry-run mode)
    pub fn deleted(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().filter(|f| f.deleted).map(|f| &f.path)
    }

    pub fn uppercase(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().filter(|f| f.has_uppercase).map(|f| &f.path)
    }
}
