//! Time extraction module
//!
//! Reads the creation timestamp embedded in an image's metadata. The result
//! is an explicit `Option`: `None` means no usable timestamp, which is an
//! ordinary outcome and never an error.

pub mod exif;

pub use self::exif::extract_creation_time;
