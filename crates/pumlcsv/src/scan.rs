//! Per-file scanning.

use std::{fs, path::Path};

use log::debug;

use pumlcsv_core::Record;

use crate::PumlCsvError;

/// Read `path` and return the records of every node or edge line, in line
/// order.
///
/// Invalid UTF-8 is replaced rather than rejected, so the only failure is an
/// I/O error while reading the file.
///
/// # Errors
///
/// Returns [`PumlCsvError::Io`] if the file cannot be read.
pub fn scan_file(path: &Path) -> Result<Vec<Record>, PumlCsvError> {
    let bytes = fs::read(path).map_err(|err| PumlCsvError::io(path, err))?;
    let source = String::from_utf8_lossy(&bytes);
    let file = path.to_string_lossy().into_owned();

    let records: Vec<Record> = pumlcsv_parser::scan(&source)
        .map(|line| Record::new(file.as_str(), line.lineno, line.element, line.text))
        .collect();

    debug!(file = file.as_str(), records = records.len(); "Scanned file");
    Ok(records)
}
