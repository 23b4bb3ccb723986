//! Dated sub-folder creation and file relocation

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Format used for dated sub-folder names
pub const SUBFOLDER_FORMAT: &str = "%Y_%m_%d";

/// Sub-folder name for a timestamp, `YYYY_MM_DD`
///
/// Only the calendar date matters; the time of day is ignored.
pub fn subfolder_name(timestamp: &NaiveDateTime) -> String {
    timestamp.format(SUBFOLDER_FORMAT).to_string()
}

/// Make sure `dir` exists as a directory, creating it and any missing parents
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_directory(dir: &Path) -> Result<bool> {
    match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => Ok(false),
        Ok(_) => Err(Error::SubfolderConflict {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|source| Error::CreateSubfolder {
                path: dir.to_path_buf(),
                source,
            })?;
            debug!(?dir, "Created sub-folder");
            Ok(true)
        }
        Err(source) => Err(Error::CreateSubfolder {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Move a file with a same-filesystem rename
///
/// An existing file at `to` is never overwritten.
pub fn relocate(from: &Path, to: &Path) -> Result<()> {
    let relocate_error = |source| Error::Relocate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if fs::symlink_metadata(to).is_ok() {
        return Err(relocate_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )));
    }

    fs::rename(from, to).map_err(relocate_error)
}
