//! Report formatter implementation
//! Author: kartik4091

use std::fs;
use std::path::Path;

use super::{ReportFormat, SweepReport};
use crate::error::{ReportError, Result};

/// Formats a sweep report into the supported output formats
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(report: &SweepReport, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::PlainText => Ok(Self::to_text(report)),
            ReportFormat::Json => Self::to_json(report),
        }
    }

    /// Writes the report to `path`
    pub fn write(report: &SweepReport, format: ReportFormat, path: &Path) -> Result<()> {
        let content = Self::format(report, format)?;
        fs::write(path, content).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn to_text(report: &SweepReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Scanned {} file(s) matching '{}' under {}\n",
            report.scanned(),
            report.extension,
            report.root.display()
        ));

        let verb = if report.dry_run { "Would delete" } else { "Deleted" };
        for path in report.deleted() {
            output.push_str(&format!("{}: {}\n", verb, path.display()));
        }
        for file in report.files.iter().filter(|f| f.has_uppercase) {
            output.push_str(&format!("Uppercase: {}", file.path.display()));
            if let Some(name) = &file.suggested_name {
                output.push_str(&format!(" (suggested name: {})", name));
            }
            output.push('\n');
        }

        output
    }

    fn to_json(report: &SweepReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report).map_err(ReportError::Serialize)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SweepConfig;
    use crate::types::{CandidateFile, Validity};
    use std::path::PathBuf;

    fn sample(dry_run: bool) -> SweepReport {
        let mut report = SweepReport::new(&SweepConfig::new("/PDFs").with_dry_run(dry_run));
        report.record(CandidateFile {
            path: PathBuf::from("/PDFs/Bad.pdf"),
            file_name: "Bad.pdf".into(),
            validity: Validity::Corrupt("Header".into()),
            has_uppercase: true,
            suggested_name: Some("bad.pdf".into()),
            deleted: true,
        });
        report
    }

    #[test]
    fn test_text_format() {
        let text = ReportFormatter::format(&sample(false), ReportFormat::PlainText).unwrap();
        assert!(text.starts_with("Scanned 1 file(s) matching '.pdf' under /PDFs"));
        assert!(text.contains("Deleted: /PDFs/Bad.pdf"));
        assert!(text.contains("Uppercase: /PDFs/Bad.pdf (suggested name: bad.pdf)"));
    }

    #[test]
    fn test_text_format_dry_run() {
        let text = ReportFormatter::format(&sample(true), ReportFormat::PlainText).unwrap();
        assert!(text.contains("Would delete: /PDFs/Bad.pdf"));
    }

    #[test]
    fn test_json_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        ReportFormatter::write(&sample(false), ReportFormat::Json, &out).unwrap();

        let parsed: SweepReport = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed.scanned(), 1);
        assert_eq!(parsed.files[0].validity, Validity::Corrupt("Header".into()));
    }
}
