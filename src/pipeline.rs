//! Core sweep orchestration
//! Author: kartik4091
//!
//! Scans the configured root, deletes the files the validator rejects and
//! flags file names that contain uppercase letters. Each file is handled
//! on its own, in scan order; any error aborts the run.

use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::cleaner::{DryRunRemover, FsRemover, Remover};
use crate::config::SweepConfig;
use crate::error::{Error, ReportError, Result};
use crate::report::SweepReport;
use crate::scanner::PathScanner;
use crate::types::{CandidateFile, Validity};
use crate::utils::{has_uppercase, path_basename, NameSanitizer};
use crate::verification::validate;

pub struct Pipeline {
    config: SweepConfig,
    sanitizer: NameSanitizer,
}

impl Pipeline {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            sanitizer: NameSanitizer::new(),
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs the sweep with the remover the config asks for, writing
    /// notices to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<SweepReport> {
        if self.config.dry_run {
            self.run(&mut DryRunRemover::default(), out)
        } else {
            self.run(&mut FsRemover, out)
        }
    }

    pub fn run<R: Remover, W: Write>(&self, remover: &mut R, out: &mut W) -> Result<SweepReport> {
        self.config.validate()?;
        info!(
            "Sweeping {} for '{}'{}",
            self.config.root.display(),
            self.config.extension,
            if self.config.dry_run { " (dry run)" } else { "" }
        );

        let files = PathScanner::new(self.config.extension.as_str()).scan(&self.config.root)?;
        let mut report = SweepReport::new(&self.config);

        for path in files {
            let candidate = self.process(&path, remover, out)?;
            report.record(candidate);
        }

        info!(
            "Sweep finished: {} scanned, {} deleted, {} uppercase",
            report.scanned(),
            report.deleted().count(),
            report.uppercase().count()
        );
        Ok(report)
    }

    fn process<R: Remover, W: Write>(
        &self,
        path: &Path,
        remover: &mut R,
        out: &mut W,
    ) -> Result<CandidateFile> {
        debug!("Processing {}", path.display());

        let validity = validate(path)?;
        let mut deleted = false;
        if let Validity::Corrupt(reason) = &validity {
            notice(out, reason)?;
            notice(
                out,
                &format!("Invalid PDF detected: {}. Deleting file.", path.display()),
            )?;
            warn!("Invalid PDF {}: {}", path.display(), reason);
            remover.remove(path)?;
            deleted = true;
        }

        // String check only, so it still holds for a file deleted above
        let file_name = path_basename(path);
        let uppercase = has_uppercase(&file_name);
        let mut suggested_name = None;
        if uppercase {
            notice(
                out,
                &format!("Uppercase letter found in filename: {}", path.display()),
            )?;
            let suggestion = self.sanitizer.sanitize(&file_name);
            info!("Uppercase filename {}, suggested {}", path.display(), suggestion);
            suggested_name = Some(suggestion);
        }

        Ok(CandidateFile {
            path: path.to_path_buf(),
            file_name,
            validity,
            has_uppercase: uppercase,
            suggested_name,
            deleted,
        })
    }
}

fn notice<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(|e| Error::Report(ReportError::Console(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_root_produces_empty_report() {
        let dir = tempdir().unwrap();
        let mut out: Vec<u8> = Vec::new();
        let report = Pipeline::new(SweepConfig::new(dir.path()))
            .execute(&mut out)
            .unwrap();

        assert_eq!(report.scanned(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_uppercase_reported_after_deletion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Broken.pdf");
        fs::write(&path, b"").unwrap();

        let mut out = Vec::new();
        let report = Pipeline::new(SweepConfig::new(dir.path()))
            .execute(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!path.exists());
        assert!(text.contains("Invalid PDF detected:"));
        assert!(text.contains("Uppercase letter found in filename:"));
        assert!(report.files[0].deleted && report.files[0].has_uppercase);
        assert_eq!(report.files[0].suggested_name.as_deref(), Some("broken.pdf"));
    }

    #[test]
    fn test_invalid_config_rejected_before_scanning() {
        let config = SweepConfig::new("/nonexistent").with_extension("");
        let err = Pipeline::new(config).execute(&mut std::io::sink()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
