//! Recognized image file extensions

use std::path::Path;

/// Extensions that can carry EXIF data, normalized to lowercase with a leading dot
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".tiff", ".png"];

/// Check whether an already-lowercased, dot-prefixed extension is recognized
pub fn is_recognized(extension: &str) -> bool {
    RECOGNIZED_EXTENSIONS.contains(&extension)
}

/// Lowercased extension of a file name, from its last `.` onward
///
/// A dotfile such as `.JPG` is all extension. Names without a dot yield an
/// empty string.
pub fn normalized_extension(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();

    name.rfind('.')
        .map(|dot| name[dot..].to_lowercase())
        .unwrap_or_default()
}

/// Check whether a path has a recognized image extension, in any letter case
pub fn is_image_path(path: &Path) -> bool {
    is_recognized(&normalized_extension(path))
}
