//! EXIF Date Sorter - moves photos into dated folders
//!
//! Scans the immediate contents of a folder for JPG, JPEG, TIFF and PNG
//! files, reads each file's EXIF creation date and moves it into a
//! `YYYY_MM_DD` sub-folder of the same folder. Files without a date stay put.

pub mod cli;
pub mod config;
pub mod error;
pub mod extensions;
pub mod organize;
pub mod output;
pub mod process;
pub mod time;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use process::{FileResult, FileStatus, Processor, ScanSummary};
