//! File removal
//! Author: kartik4091

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Deletes files flagged by the sweep
pub trait Remover {
    fn remove(&mut self, path: &Path) -> Result<()>;
}

/// Deletes files from disk. Missing files and permission failures are
/// errors; there is no retry.
#[derive(Debug, Default)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&mut self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|source| Error::Removal {
            path: path.to_path_buf(),
            source,
        })?;
        warn!("Deleted {}", path.display());
        Ok(())
    }
}

/// Records what would have been deleted and leaves the file alone
#[derive(Debug, Default)]
pub struct DryRunRemover {
    pub removed: Vec<PathBuf>,
}

impl Remover for DryRunRemover {
    fn remove(&mut self, path: &Path) -> Result<()> {
        info!("Dry run: would delete {}", path.display());
        self.removed.push(path.to_path_buf());
        Ok(())
    }
}

/// Deletes the file at `path`
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    FsRemover.remove(path.as_ref())
}
