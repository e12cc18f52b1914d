//! Recursive path scanner
//! Author: kartik4091

use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Walks a directory tree and collects the files whose name ends with a
/// given suffix
#[derive(Debug, Clone)]
pub struct PathScanner {
    suffix: String,
}

impl PathScanner {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Plain case-sensitive suffix match on the file name
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }

    /// Returns the absolute path of every matching regular file under
    /// `root`, in directory-enumeration order.
    #[instrument(skip(self), fields(suffix = %self.suffix))]
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = std::path::absolute(root).map_err(|e| Error::io(root, e))?;
        // A missing root is left to walkdir, which reports it as a traversal error
        if root.exists() && !root.is_dir() {
            return Err(Error::NotADirectory(root));
        }
        let mut matched = Vec::new();

        for entry in WalkDir::new(&root).follow_links(false) {
            let entry = entry.map_err(|source| Error::Traversal {
                root: root.clone(),
                source,
            })?;

            let file_type = entry.file_type();
            let is_file =
                file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            if self.matches(&entry.file_name().to_string_lossy()) {
                debug!("Matched {}", entry.path().display());
                matched.push(entry.into_path());
            }
        }

        debug!("Scan of {} found {} file(s)", root.display(), matched.len());
        Ok(matched)
    }
}

/// Convenience wrapper around [`PathScanner::scan`]
pub fn scan(root: impl AsRef<Path>, suffix: &str) -> Result<Vec<PathBuf>> {
    PathScanner::new(suffix).scan(root.as_ref())
}
