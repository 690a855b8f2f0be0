//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use pumlcsv::{PumlCsvError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for PumlCsvError {
    fn from(err: ConfigError) -> Self {
        PumlCsvError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (pumlcsv/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PumlCsvError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("pumlcsv/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "pumlcsv", "pumlcsv") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, PumlCsvError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path).map_err(|err| PumlCsvError::io(path, err))?;
    parse_config(&content)
}

/// Parse configuration from TOML text
fn parse_config(content: &str) -> Result<AppConfig, PumlCsvError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    config
        .discovery()
        .validate()
        .map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(
            config.discovery().file_extensions(),
            ["puml", "plantuml", "txt", "uml"]
        );
        assert!(!config.csv().include_raw());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [discovery]
            file_extensions = ["puml", "iuml"]
            directory_extensions = ["iuml"]

            [csv]
            include_raw = true
            "#,
        )
        .unwrap();

        assert_eq!(config.discovery().file_extensions(), ["puml", "iuml"]);
        assert_eq!(config.discovery().directory_extensions(), ["iuml"]);
        assert!(config.csv().include_raw());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[csv\ninclude_raw = ").unwrap_err();
        assert!(matches!(err, PumlCsvError::Config(msg) if msg.starts_with("Failed to parse TOML")));
    }

    #[test]
    fn test_parse_rejects_empty_extension_list() {
        let err = parse_config("[discovery]\ndirectory_extensions = []\n").unwrap_err();
        assert!(
            matches!(err, PumlCsvError::Config(msg) if msg.contains("directory_extensions must not be empty"))
        );
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, PumlCsvError::Config(msg) if msg.starts_with("Missing configuration file")));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[csv]\ninclude_raw = true\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.csv().include_raw());
    }
}
