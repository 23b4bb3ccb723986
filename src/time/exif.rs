//! EXIF time extraction for images

use crate::output;
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{trace, warn};

/// EXIF tags to try for the creation date, in priority order
const DATE_TAGS: &[Tag] = &[
    Tag::DateTimeOriginal, // When the original image was taken
    Tag::DateTime,         // File change date/time, used as a fallback
];

/// Extract the creation time embedded in an image's EXIF metadata
///
/// Returns `None` when the file cannot be opened, has no EXIF container, or
/// has no parsable date tag. Only the open failure is reported, since files
/// without EXIF are routine. The file handle is dropped before returning.
pub fn extract_creation_time(path: &Path) -> Option<NaiveDateTime> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(?path, error = %e, "Failed to open file");
            output::print_warning(&format!(
                "Error opening file: {}. Error: {}",
                path.display(),
                e
            ));
            return None;
        }
    };
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(e) => {
            trace!(?path, error = %e, "No readable EXIF container");
            return None;
        }
    };

    // Missing and malformed tags are treated alike
    DATE_TAGS.iter().find_map(|tag| {
        let field = exif.get_field(*tag, In::PRIMARY)?;
        let datetime = parse_exif_datetime(&field.display_value().to_string())?;
        trace!(?path, ?tag, %datetime, "Found EXIF date");
        Some(datetime)
    })
}

/// Parse an EXIF datetime string
///
/// Accepts the raw `"YYYY:MM:DD HH:MM:SS"` form as well as the
/// `"YYYY-MM-DD HH:MM:SS"` form produced by the decoder's display formatting.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_matches('"');

    let formats = [
        "%Y:%m:%d %H:%M:%S",
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}
