//! Error types for pumlcsv operations.
//!
//! This module provides the main error type [`PumlCsvError`]. Every failure
//! aborts the run; there is no partial-result recovery.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for pumlcsv operations.
#[derive(Debug, Error)]
pub enum PumlCsvError {
    #[error("I/O error on `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PumlCsvError {
    /// Create a new `Io` error for the file at `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = PumlCsvError::io(
            "diagrams/a.puml",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "I/O error on `diagrams/a.puml`: permission denied"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = PumlCsvError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
