//! Folder scan and file organization
//!
//! A single sequential pass over the immediate children of the target folder:
//! - Filtering by recognized image extension
//! - Extracting the EXIF creation time
//! - Moving timestamped images into `YYYY_MM_DD` sub-folders
//!
//! Sub-folder creation and move failures abort the whole scan.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extensions::is_image_path;
use crate::organize::{ensure_directory, relocate, subfolder_name};
use crate::output;
use crate::time::extract_creation_time;
use chrono::NaiveDateTime;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info, span};
use walkdir::WalkDir;

/// Result of processing a single image file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Source file path
    pub source: PathBuf,
    /// Destination file path (if moved or would be moved)
    pub destination: Option<PathBuf>,
    /// Extracted creation time
    pub timestamp: Option<NaiveDateTime>,
    /// Processing status
    pub status: FileStatus,
}

/// Status of an image file after the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Moved into its dated sub-folder
    Moved,
    /// No EXIF creation time; left in place
    NoTimestamp,
    /// Dry run - would have been moved
    DryRun,
}

/// Counters accumulated over one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Image files with a recognized extension
    pub found: usize,
    /// Image files moved (or that would be moved in a dry run)
    pub actioned: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found: {}, Moved: {}", self.found, self.actioned)
    }
}

/// One immediate child of the target folder
#[derive(Debug, Clone)]
struct DirectoryEntry {
    file_name: OsString,
    is_dir: bool,
}

/// Sorts the images of one folder into dated sub-folders
#[derive(Debug)]
pub struct Processor {
    config: Config,
    summary: ScanSummary,
}

impl Processor {
    /// Create a processor after checking that the configured folder exists
    pub fn new(config: Config) -> Result<Self> {
        resolve_target(&config.directory)?;

        Ok(Self {
            config,
            summary: ScanSummary::default(),
        })
    }

    /// Counters so far; complete once [`Processor::run`] returns
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Run the scan
    ///
    /// Returns one result per image file. The first sub-folder or move
    /// failure stops the scan; files already moved stay moved.
    pub fn run(&mut self) -> Result<Vec<FileResult>> {
        let _span = span!(Level::INFO, "scan", directory = ?self.config.directory).entered();

        output::print_scan_start(&self.config.directory.display().to_string());
        info!(dry_run = self.config.dry_run, "Scanning folder");

        let entries = list_entries(&self.config.directory)?;
        debug!(count = entries.len(), "Listed folder entries");

        let mut results = Vec::new();
        for entry in entries {
            if !is_image_path(Path::new(&entry.file_name)) {
                debug!(file_name = ?entry.file_name, "Skipping entry");
                continue;
            }
            if entry.is_dir {
                // Qualifies by name; opening it yields no timestamp
                debug!(file_name = ?entry.file_name, "Folder with an image extension");
            }

            self.summary.found += 1;
            let result = self.process_image(&entry.file_name)?;
            if result.status != FileStatus::NoTimestamp {
                self.summary.actioned += 1;
            }
            results.push(result);
        }

        info!(
            found = self.summary.found,
            actioned = self.summary.actioned,
            "Scan complete"
        );

        Ok(results)
    }

    fn process_image(&self, file_name: &OsString) -> Result<FileResult> {
        let directory = &self.config.directory;
        let source = directory.join(file_name);
        let display_name = file_name.to_string_lossy();

        let Some(timestamp) = extract_creation_time(&source) else {
            debug!(?source, "No EXIF creation time");
            output::print_no_timestamp(&display_name);
            return Ok(FileResult {
                source,
                destination: None,
                timestamp: None,
                status: FileStatus::NoTimestamp,
            });
        };

        let subfolder = subfolder_name(&timestamp);
        let destination = directory.join(&subfolder).join(file_name);

        if self.config.dry_run {
            info!(?source, ?destination, %timestamp, "Would move file");
            output::print_would_move(&display_name, &subfolder);
            return Ok(FileResult {
                source,
                destination: Some(destination),
                timestamp: Some(timestamp),
                status: FileStatus::DryRun,
            });
        }

        if ensure_directory(&directory.join(&subfolder))? {
            info!(%subfolder, "Created sub-folder");
        }
        relocate(&source, &destination)?;

        info!(?source, ?destination, %timestamp, "Moved file");
        output::print_moved(&display_name, &subfolder);

        Ok(FileResult {
            source,
            destination: Some(destination),
            timestamp: Some(timestamp),
            status: FileStatus::Moved,
        })
    }
}

/// Check that `path` exists and is a folder
fn resolve_target(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|source| Error::TargetNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Snapshot the immediate children of `dir` in listing order
///
/// The listing is collected up front so that sub-folders created during the
/// scan are never visited.
fn list_entries(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|source| Error::ListDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            Ok(DirectoryEntry {
                file_name: entry.file_name().to_os_string(),
                is_dir: entry.file_type().is_dir(),
            })
        })
        .collect()
}
