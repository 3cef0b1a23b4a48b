//! Encoded image payloads shared between requests and responses.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// MIME type assumed when a provider does not report one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Base64-encoded image paired with its MIME type.
///
/// The encoded text is reference counted, so cloning an `EncodedImage` into
/// several provider request bodies shares one copy of the data.
///
/// # Examples
///
/// ```
/// use tableau_core::EncodedImage;
///
/// let image = EncodedImage::from_bytes(&[0x89, 0x50, 0x4E, 0x47], "image/png");
/// assert_eq!(image.data(), "iVBORw==");
/// assert_eq!(image.decode().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedImage {
    data: Arc<str>,
    mime: String,
}

impl EncodedImage {
    /// Wrap already-encoded base64 text.
    pub fn new(data: impl Into<Arc<str>>, mime: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime: mime.into(),
        }
    }

    /// Encode raw bytes with the standard base64 alphabet.
    pub fn from_bytes(bytes: &[u8], mime: impl Into<String>) -> Self {
        Self::new(STANDARD.encode(bytes), mime)
    }

    /// Base64 text.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// MIME type, e.g. `image/png`.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Decode back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.data.as_bytes())
    }

    /// `data:` URL suitable for inline previews.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }

    /// Whether two images share the same encoded buffer.
    pub fn shares_data_with(&self, other: &EncodedImage) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

/// Guess an image MIME type from a file extension.
///
/// Returns `None` for extensions that are not a supported reference image.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// File extension for a MIME type, falling back to `png`.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/heic" => "heic",
        "image/heif" => "heif",
        _ => "png",
    }
}
