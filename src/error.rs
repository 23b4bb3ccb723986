//! Error types for the sorter
//!
//! Only whole-run failures live here. A file that cannot be read or carries
//! no usable EXIF date is not an error; see [`crate::time`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sorter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a scan
#[derive(Error, Debug)]
pub enum Error {
    #[error("Folder {} not found: {source}", .path.display())]
    TargetNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a folder", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Unable to list folder {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Unable to create sub-folder {}: {source}", .path.display())]
    CreateSubfolder {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to create sub-folder {}: a file with that name already exists", .path.display())]
    SubfolderConflict { path: PathBuf },

    #[error("Unable to move {} to {}: {source}", .from.display(), .to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for this failure
    ///
    /// - `1`: target folder missing, not a folder, or unreadable
    /// - `2`: a dated sub-folder could not be created
    /// - `3`: a file could not be moved
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::TargetNotFound { .. } | Error::NotADirectory { .. } | Error::ListDirectory { .. } => 1,
            Error::CreateSubfolder { .. } | Error::SubfolderConflict { .. } => 2,
            Error::Relocate { .. } => 3,
        }
    }
}
