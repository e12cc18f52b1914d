//! Core data types shared across the sweep stages
//! Author: kartik4091

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of opening a candidate through the PDF library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Validity {
    /// Document opened and has at least one page
    Valid { pages: usize },
    /// Document failed to parse or has no pages
    Corrupt(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid { .. })
    }
}

/// A file discovered by the scanner, together with what the sweep
/// decided about it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    pub validity: Validity,
    pub has_uppercase: bool,
    /// Lowercase, filesystem-safe name offered for flagged files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_name: Option<String>,
    /// Set when the file was handed to the remover (dry-run included)
    pub deleted: bool,
}
