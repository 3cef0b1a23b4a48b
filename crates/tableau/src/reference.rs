//! Loading reference images from disk into a board.

use std::path::{Path, PathBuf};
use tableau_core::{DEFAULT_CHARACTER_SLOTS, ReferenceAsset, ReferenceBoard, mime_for_path};
use tableau_error::{IoError, TableauResult};
use tracing::{debug, instrument};

/// Read one reference image, inferring its MIME type from the extension.
///
/// # Errors
///
/// Returns an IO error if the extension is not a supported image type, the
/// file cannot be read, or the file is empty.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_reference(path: &Path) -> TableauResult<ReferenceAsset> {
    let mime = mime_for_path(path)
        .ok_or_else(|| IoError::new("Unsupported reference image type", path))?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| IoError::new(format!("Failed to read reference image: {}", e), path))?;
    if bytes.is_empty() {
        return Err(IoError::new("Reference image is empty", path).into());
    }

    debug!(mime, bytes = bytes.len(), "Loaded reference image");
    Ok(ReferenceAsset::new(bytes, mime))
}

/// Build a board with one selected character slot per path.
///
/// The board has at least the default number of slots. The background, if
/// given, is attached and its use flag set to `use_background`.
///
/// # Errors
///
/// Returns the first error from [`load_reference`].
pub async fn load_board(
    characters: &[PathBuf],
    background: Option<&Path>,
    use_background: bool,
) -> TableauResult<ReferenceBoard> {
    let mut board = ReferenceBoard::with_slots(characters.len().max(DEFAULT_CHARACTER_SLOTS));
    for (id, path) in characters.iter().enumerate() {
        let asset = load_reference(path).await?;
        board = board
            .attach_character(id, asset)
            .set_character_selected(id, true);
    }

    if let Some(path) = background {
        board = board
            .attach_background(load_reference(path).await?)
            .set_use_background(use_background);
    }

    Ok(board)
}
