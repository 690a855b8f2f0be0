//! CLI logic for the pumlcsv tool.
//!
//! This module resolves the input path, extracts the records and writes the
//! CSV file, returning an [`Outcome`] that `main` reports and maps to an exit
//! code.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fmt, path::PathBuf};

use log::info;

use pumlcsv::{
    Extractor, PumlCsvError, WriteSummary,
    config::{AppConfig, CsvConfig},
};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Discovery found nothing at the given path. No CSV was written.
    NoFiles(PathBuf),
    /// The CSV file was written.
    Written(WriteSummary),
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::NoFiles(_) => 1,
            Outcome::Written(_) => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoFiles(path) => {
                write!(f, "No .puml/.plantuml files found at {}", path.display())
            }
            Outcome::Written(summary) => fmt::Display::fmt(summary, f),
        }
    }
}

/// Run the pumlcsv CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PumlCsvError` for:
/// - Configuration loading errors
/// - Input files that cannot be read
/// - Output that cannot be written
pub fn run(args: &Args) -> Result<Outcome, PumlCsvError> {
    info!(
        input_path = args.path,
        output_path = args.output;
        "Extracting PlantUML elements"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    // The flag can only turn the raw column on
    let include_raw = args.include_raw || app_config.csv().include_raw();
    let app_config = AppConfig::new(app_config.discovery().clone(), CsvConfig::new(include_raw));

    let extractor = Extractor::new(app_config);

    let input = PathBuf::from(&args.path);
    let files = extractor.discover(&input);
    if files.is_empty() {
        return Ok(Outcome::NoFiles(input));
    }

    let records = extractor.extract(&files)?;
    let summary = extractor.write_csv(&args.output, &records, files.len())?;

    Ok(Outcome::Written(summary))
}
