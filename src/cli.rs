//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Sort photos into YYYY_MM_DD folders by their EXIF creation date
///
/// Looks at the JPG, JPEG, TIFF and PNG files directly inside DIRECTORY and
/// moves each one that carries an EXIF creation date into a sub-folder named
/// after that date. Files without a date are left where they are.
#[derive(Parser, Debug)]
#[command(name = "exif-date-sorter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to sort (defaults to the current folder)
    pub directory: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    ///
    /// CLI arguments override settings from the file.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Dry run mode - show what would be moved without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log file format as JSON
    #[arg(long)]
    pub json_log: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub sample_config: bool,
}

impl Cli {
    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(ref directory) = self.directory {
            config.directory = directory.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.json_log {
            config.json_log = true;
        }
        if let Some(ref log_file) = self.log_file {
            config.log_file = Some(log_file.clone());
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }
}
