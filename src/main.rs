//! PDF Sweeper - CLI Interface
//! Author: kartik4091
//!
//! Deletes PDFs that cannot be opened or have no pages and flags file names
//! with uppercase letters. With no arguments it sweeps ./PDFs for .pdf files.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use pdfsweep::{Pipeline, ReportFormat, ReportFormatter, SweepConfig};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// JSON report (default)
    Json,
    /// Plain text summary
    Text,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Text => ReportFormat::PlainText,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages (default)
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<LogLevel>("verbose")
        .copied()
        .unwrap_or(LogLevel::Warn);
    init_logging(log_level);

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let pipeline = Pipeline::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match pipeline.execute(&mut out) {
        Ok(report) => report,
        Err(e) => {
            error!("Sweep failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Some(report_path) = matches.get_one::<PathBuf>("report") {
        if let Err(e) = ReportFormatter::write(&report, report_format(&matches), report_path) {
            error!("Failed to write report: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
        info!("Report written to {}", report_path.display());
    }
}

fn build_cli() -> Command {
    Command::new("pdfsweep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete unreadable PDFs and flag uppercase file names")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory tree to scan [default: ./PDFs]"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .value_name("SUFFIX")
                .help("Case-sensitive file name suffix to select [default: .pdf]"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report invalid files without deleting them"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (JSON/YAML)"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Write a summary of the run"),
        )
        .arg(
            Arg::new("report-format")
                .long("report-format")
                .value_parser(value_parser!(OutputFormat))
                .default_value("json")
                .requires("report")
                .help("Format of the --report file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_parser(value_parser!(LogLevel))
                .default_value("warn")
                .help("Set logging verbosity"),
        )
}

fn report_format(matches: &ArgMatches) -> ReportFormat {
    matches
        .get_one::<OutputFormat>("report-format")
        .copied()
        .unwrap_or(OutputFormat::Json)
        .into()
}

/// Config file first, then command-line overrides
fn load_config(matches: &ArgMatches) -> pdfsweep::Result<SweepConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SweepConfig::from_file(path)?,
        None => SweepConfig::default(),
    };

    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config.root = root.clone();
    }
    if let Some(extension) = matches.get_one::<String>("extension") {
        config.extension = extension.clone();
    }
    if matches.get_flag("dry-run") {
        config.dry_run = true;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("pdfsweep={}", filter_level)))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_no_arguments_keep_defaults() {
        let config = load_config(&parse(&["pdfsweep"])).unwrap();
        assert_eq!(config, SweepConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sweep.yaml");
        std::fs::write(&file, "root: from-file\nextension: .PDF\n").unwrap();

        let config = load_config(&parse(&[
            "pdfsweep",
            "--config",
            file.to_str().unwrap(),
            "--root",
            "from-cli",
            "--dry-run",
        ]))
        .unwrap();

        assert_eq!(config.root, PathBuf::from("from-cli"));
        assert_eq!(config.extension, ".PDF");
        assert!(config.dry_run);
    }

    #[test]
    fn test_report_format_selection() {
        assert_eq!(report_format(&parse(&["pdfsweep"])), ReportFormat::Json);
        assert_eq!(
            report_format(&parse(&["pdfsweep", "--report", "out.txt", "--report-format", "text"])),
            ReportFormat::PlainText
        );
        assert!(build_cli()
            .try_get_matches_from(["pdfsweep", "--report-format", "text"])
            .is_err());
    }

    #[test]
    fn test_empty_extension_flag_rejected() {
        assert!(load_config(&parse(&["pdfsweep", "--extension", ""])).is_err());
    }
}
