//! Error adapter for converting PumlCsvError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use pumlcsv::PumlCsvError;

/// Adapter rendering a [`PumlCsvError`] as a miette diagnostic.
///
/// Extraction errors carry no source spans, so the adapter only contributes a
/// stable code and a help line per variant.
pub struct ErrorAdapter<'a>(pub &'a PumlCsvError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            PumlCsvError::Io { .. } => "pumlcsv::io",
            PumlCsvError::Csv(_) => "pumlcsv::csv",
            PumlCsvError::Config(_) => "pumlcsv::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            PumlCsvError::Io { .. } => "check that the path exists and is readable",
            PumlCsvError::Csv(_) => "check that the output location is writable",
            PumlCsvError::Config(_) => {
                "configuration files accept a [discovery] and a [csv] section"
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
