//! CSV export of extracted records.
//!
//! The header is fixed: `file, lineno, element_type, source, target, relation,
//! label`, plus `raw` when enabled. Fields are quoted only when needed and
//! records end with CRLF.

use std::{
    fmt,
    fs::File,
    io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use pumlcsv_core::Record;

use crate::PumlCsvError;

/// Columns written for every record.
pub const HEADER: [&str; 7] = [
    "file",
    "lineno",
    "element_type",
    "source",
    "target",
    "relation",
    "label",
];

/// Optional trailing column holding the original line.
pub const RAW_COLUMN: &str = "raw";

/// Counts reported after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    rows: usize,
    files: usize,
    output: PathBuf,
}

impl WriteSummary {
    /// Returns the number of data rows written.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of input files the rows came from.
    pub fn files(&self) -> usize {
        self.files
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows from {} files to {}",
            self.rows,
            self.files,
            self.output.display()
        )
    }
}

/// Writes records as CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    include_raw: bool,
}

impl CsvExporter {
    /// Create an exporter.
    ///
    /// # Arguments
    ///
    /// * `include_raw` - Append the `raw` column.
    pub fn new(include_raw: bool) -> Self {
        Self { include_raw }
    }

    /// Write the header and one row per record to `sink`.
    ///
    /// Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns [`PumlCsvError::Csv`] if writing to `sink` fails.
    pub fn write<W: io::Write>(&self, sink: W, records: &[Record]) -> Result<usize, PumlCsvError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(sink);

        if self.include_raw {
            writer.write_record(HEADER.iter().chain([&RAW_COLUMN]))?;
        } else {
            writer.write_record(HEADER)?;
        }

        for record in records {
            let lineno = record.lineno().to_string();
            let row = [
                record.file(),
                lineno.as_str(),
                record.element_type().as_str(),
                record.source(),
                record.target(),
                record.relation(),
                record.label(),
            ];

            if self.include_raw {
                writer.write_record(row.iter().chain([&record.raw()]))?;
            } else {
                writer.write_record(row)?;
            }
        }

        writer.flush().map_err(csv::Error::from)?;
        Ok(records.len())
    }

    /// Write `records` to the file at `output`, replacing any existing file.
    ///
    /// # Arguments
    ///
    /// * `output` - Destination path.
    /// * `records` - Records of all scanned files, in output order.
    /// * `files` - Number of files the records were read from, for reporting.
    ///
    /// # Errors
    ///
    /// Returns [`PumlCsvError::Io`] if the file cannot be created and
    /// [`PumlCsvError::Csv`] if writing fails.
    pub fn write_file(
        &self,
        output: &Path,
        records: &[Record],
        files: usize,
    ) -> Result<WriteSummary, PumlCsvError> {
        debug!(
            output = output.display().to_string(),
            include_raw = self.include_raw;
            "Creating CSV file"
        );
        let file = File::create(output).map_err(|err| PumlCsvError::io(output, err))?;

        let rows = self.write(file, records)?;

        info!(output = output.display().to_string(), rows = rows; "CSV written");
        Ok(WriteSummary {
            rows,
            files,
            output: output.to_path_buf(),
        })
    }
}
