//! Conjunctiva image checks.
//!
//! Images are never decoded; the path only has to exist and look like an image.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Extensions accepted as images (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "heic",
];

/// True when `path` has an image extension (case-insensitive).
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Checks that `path` is an existing file with an image extension.
pub fn validate_image_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if !metadata.is_file() || !is_image_path(path) {
        return Err(IngestError::UnsupportedImage {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
