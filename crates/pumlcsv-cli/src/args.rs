//! Command-line argument definitions for the pumlcsv CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path, CSV output, configuration
//! file selection, and logging verbosity.

use clap::Parser;

/// Extract nodes/edges from PlantUML files into CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File or directory to scan for .puml/.plantuml files
    #[arg(help = "File or directory to scan for .puml/.plantuml files")]
    pub path: String,

    /// CSV output file
    #[arg(short, long, default_value = "puml_edges.csv")]
    pub output: String,

    /// Include the raw line in the CSV
    #[arg(long)]
    pub include_raw: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pumlcsv", "diagrams"]).unwrap();

        assert_eq!(args.path, "diagrams");
        assert_eq!(args.output, "puml_edges.csv");
        assert!(!args.include_raw);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "pumlcsv",
            "a.puml",
            "-o",
            "out.csv",
            "--include-raw",
            "--config",
            "pumlcsv.toml",
        ])
        .unwrap();

        assert_eq!(args.output, "out.csv");
        assert!(args.include_raw);
        assert_eq!(args.config.as_deref(), Some("pumlcsv.toml"));
    }

    #[test]
    fn test_path_is_required() {
        assert!(Args::try_parse_from(["pumlcsv"]).is_err());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
