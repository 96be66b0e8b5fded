//! Centralized filename conventions for gallery images.
//!
//! The filesystem is the data source: image files carry their own display
//! text and the cover image is designated by name. This module is the one
//! place that knows both conventions.
//!
//! ## Alt text
//!
//! The filename up to the first `.` becomes the alt text, with `-` and `_`
//! converted to spaces:
//! - `my_cool-ride.jpg` → "my cool ride"
//! - `bergtijdrit.jpg` → "bergtijdrit"
//!
//! ## Cover designation
//!
//! A filename containing `cover` (case-insensitive) anywhere marks the
//! event's cover image: `cover.jpg`, `cover-start.jpg`, `GroupCover.png`.

/// Recognized image file extensions, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Derive display alt text from an image filename.
///
/// Takes everything before the first `.` and replaces dashes and
/// underscores with spaces. A filename with no dot is used whole.
pub fn alt_text(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.replace(['-', '_'], " ")
}

/// Whether a filename designates the event cover image.
pub fn has_cover_marker(file_name: &str) -> bool {
    file_name.to_lowercase().contains("cover")
}

/// Whether a filename has a recognized image extension.
pub fn is_image_name(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
