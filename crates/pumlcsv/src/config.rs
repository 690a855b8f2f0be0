//! Configuration types for PlantUML extraction.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Missing sections and fields fall back to their defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining discovery and CSV settings.
//! - [`DiscoveryConfig`] - Which file extensions are picked up.
//! - [`CsvConfig`] - Output options such as the `raw` column.
//!
//! # Example
//!
//! ```
//! # use pumlcsv::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.discovery().directory_extensions(), ["puml", "plantuml"]);
//! assert!(!config.csv().include_raw());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// File discovery section.
    #[serde(default)]
    discovery: DiscoveryConfig,

    /// CSV output section.
    #[serde(default)]
    csv: CsvConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `discovery` - Extension lists used to find input files.
    /// * `csv` - CSV output options.
    pub fn new(discovery: DiscoveryConfig, csv: CsvConfig) -> Self {
        Self { discovery, csv }
    }

    /// Returns the discovery configuration.
    pub fn discovery(&self) -> &DiscoveryConfig {
        &self.discovery
    }

    /// Returns the CSV configuration.
    pub fn csv(&self) -> &CsvConfig {
        &self.csv
    }
}

/// Extension lists used when resolving an input path.
///
/// Extensions are written without the leading dot and compared
/// case-sensitively.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Extensions accepted when the input path is a single file.
    #[serde(default = "default_file_extensions")]
    file_extensions: Vec<String>,

    /// Extensions collected when the input path is a directory, one group
    /// per entry in this order.
    #[serde(default = "default_directory_extensions")]
    directory_extensions: Vec<String>,
}

impl DiscoveryConfig {
    /// Creates a new [`DiscoveryConfig`].
    ///
    /// A leading dot on any extension is dropped.
    pub fn new(
        file_extensions: impl IntoIterator<Item = impl Into<String>>,
        directory_extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            file_extensions: strip_dots(file_extensions),
            directory_extensions: strip_dots(directory_extensions),
        }
    }

    /// Returns the extensions accepted for a single input file.
    pub fn file_extensions(&self) -> &[String] {
        &self.file_extensions
    }

    /// Returns the extension groups collected from a directory.
    pub fn directory_extensions(&self) -> &[String] {
        &self.directory_extensions
    }

    /// Checks that both extension lists are usable.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending list if it is empty or holds an
    /// empty extension.
    pub fn validate(&self) -> Result<(), String> {
        for (field, list) in [
            ("file_extensions", &self.file_extensions),
            ("directory_extensions", &self.directory_extensions),
        ] {
            if list.is_empty() {
                return Err(format!("discovery.{field} must not be empty"));
            }
            if list.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
                return Err(format!("discovery.{field} contains an empty extension"));
            }
        }
        Ok(())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            file_extensions: default_file_extensions(),
            directory_extensions: default_directory_extensions(),
        }
    }
}

/// CSV output options.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CsvConfig {
    /// Append a `raw` column holding the original line text.
    #[serde(default)]
    include_raw: bool,
}

impl CsvConfig {
    /// Creates a new [`CsvConfig`].
    pub fn new(include_raw: bool) -> Self {
        Self { include_raw }
    }

    /// Returns whether the `raw` column is written.
    pub fn include_raw(&self) -> bool {
        self.include_raw
    }
}

fn default_file_extensions() -> Vec<String> {
    ["puml", "plantuml", "txt", "uml"].map(String::from).to_vec()
}

fn default_directory_extensions() -> Vec<String> {
    ["puml", "plantuml"].map(String::from).to_vec()
}

fn strip_dots(extensions: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|ext| {
            let ext = ext.into();
            ext.strip_prefix('.').map(str::to_string).unwrap_or(ext)
        })
        .collect()
}
