//! Writing generated candidates to disk.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tableau_core::{EncodedImage, extension_for_mime};
use tableau_error::{GenerationFailure, IoError, TableauResult};
use tracing::{info, instrument};

/// File name for candidate `index` (zero-based) of one download batch.
///
/// Names follow `<prefix>-<unix millis>-<n>.<ext>` with a one-based `n`.
///
/// # Examples
///
/// ```
/// use tableau::download_file_name;
///
/// let name = download_file_name("tableau", 1_700_000_000_000, 0, "image/png");
/// assert_eq!(name, "tableau-1700000000000-1.png");
/// ```
pub fn download_file_name(prefix: &str, millis: i64, index: usize, mime: &str) -> String {
    format!(
        "{}-{}-{}.{}",
        prefix,
        millis,
        index + 1,
        extension_for_mime(mime)
    )
}

/// Decode `images` and write each one into `dir`.
///
/// All files of one call share the same timestamp. The directory is created
/// if needed. Returns the written paths in image order.
///
/// # Errors
///
/// Returns a generation failure if an image is not valid base64, and an IO
/// error if the directory or a file cannot be written.
#[instrument(skip(images), fields(images = images.len(), dir = %dir.display()))]
pub fn save_images(images: &[EncodedImage], dir: &Path, prefix: &str) -> TableauResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| IoError::new(format!("Failed to create directory: {}", e), dir))?;

    let millis = Utc::now().timestamp_millis();
    let mut written = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let bytes = image.decode().map_err(|e| {
            GenerationFailure::new("Could not save a generated image.", e.to_string())
        })?;

        let path = dir.join(download_file_name(prefix, millis, index, image.mime()));
        std::fs::write(&path, &bytes)
            .map_err(|e| IoError::new(format!("Failed to write image: {}", e), &path))?;
        written.push(path);
    }

    info!(count = written.len(), "Saved generated images");
    Ok(written)
}
