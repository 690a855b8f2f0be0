//! pumlcsv - Extract nodes and edges from PlantUML files into CSV rows.
//!
//! The extractor is deliberately shallow: it classifies individual lines as
//! node declarations (`actor User`) or binary relations (`A --> B : label`)
//! and skips everything else. It does not parse PlantUML.

pub mod config;
pub mod discovery;
pub mod export;

mod error;
mod scan;

pub use pumlcsv_core::{Element, ElementType, NodeKind, Record};

pub use error::PumlCsvError;
pub use export::{CsvExporter, WriteSummary};
pub use scan::scan_file;

use std::path::{Path, PathBuf};

use log::{debug, info};

use config::AppConfig;

/// Runs the discovery, scan and export stages with one configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use pumlcsv::{Extractor, config::AppConfig};
///
/// let extractor = Extractor::new(AppConfig::default());
///
/// let files = extractor.discover("diagrams");
/// let records = extractor.extract(&files)
///     .expect("Failed to scan diagrams");
///
/// let summary = extractor.write_csv("puml_edges.csv", &records, files.len())
///     .expect("Failed to write CSV");
/// println!("{summary}");
/// ```
#[derive(Debug, Default)]
pub struct Extractor {
    config: AppConfig,
}

impl Extractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Resolve `path` into the ordered list of files to scan.
    ///
    /// See [`discovery::discover_files`] for the rules.
    pub fn discover(&self, path: impl AsRef<Path>) -> Vec<PathBuf> {
        let path = path.as_ref();
        let files = discovery::discover_files(path, self.config.discovery());
        info!(path = path.display().to_string(), files = files.len(); "Discovered input files");
        files
    }

    /// Scan `files` in order and concatenate their records.
    ///
    /// # Errors
    ///
    /// Returns [`PumlCsvError::Io`] for the first file that cannot be read.
    /// Files after it are not scanned.
    pub fn extract(&self, files: &[PathBuf]) -> Result<Vec<Record>, PumlCsvError> {
        let mut records = Vec::new();
        for file in files {
            debug!(file = file.display().to_string(); "Scanning file");
            records.extend(scan_file(file)?);
        }
        info!(records = records.len(), files = files.len(); "Extraction complete");
        Ok(records)
    }

    /// Write `records` as CSV to `output`.
    ///
    /// Whether the `raw` column is written follows
    /// [`CsvConfig::include_raw`](config::CsvConfig::include_raw).
    ///
    /// # Errors
    ///
    /// Returns [`PumlCsvError`] if the output cannot be created or written.
    pub fn write_csv(
        &self,
        output: impl AsRef<Path>,
        records: &[Record],
        files: usize,
    ) -> Result<WriteSummary, PumlCsvError> {
        CsvExporter::new(self.config.csv().include_raw()).write_file(
            output.as_ref(),
            records,
            files,
        )
    }
}
