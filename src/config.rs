//! Configuration types for the sorter

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a sorting run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder whose images are sorted into dated sub-folders
    pub directory: PathBuf,

    /// Dry run mode - report moves without touching the file system
    pub dry_run: bool,

    /// Verbose logging
    pub verbose: bool,

    /// Write the log file as JSON
    pub json_log: bool,

    /// Optional log file, in addition to console logging
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./"),
            dry_run: false,
            verbose: false,
            json_log: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# exif-date-sorter configuration file (TOML)

# Folder to sort. Images directly inside it are moved into YYYY_MM_DD
# sub-folders named after their EXIF creation date.
directory = "./"

# Report what would be moved without creating folders or moving files
dry_run = false

# Debug-level logging on the console
verbose = false

# Also write logs to this file
# log_file = "exif-date-sorter.log"

# Write the log file as JSON lines
json_log = false
"#
        .to_string()
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}
