//! Configuration types and validation for the sweep
//! Author: kartik4091

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default directory scanned when nothing else is configured
pub const DEFAULT_ROOT: &str = "./PDFs";

/// Default file-name suffix selected by the scanner
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// Sweep execution config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Case-sensitive suffix a file name must end with
    pub extension: String,
    /// Report deletions without touching the filesystem
    pub dry_run: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl SweepConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Loads a config file, trying JSON first and YAML second
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let config: SweepConfig = serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::Config("root directory must not be empty".into()));
        }
        if self.extension.is_empty() {
            return Err(Error::Config("extension must not be empty".into()));
        }
        Ok(())
    }
}
