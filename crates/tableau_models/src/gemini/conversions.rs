//! Type conversions between Tableau and Gemini formats.

use crate::gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tableau_core::{
    DEFAULT_IMAGE_MIME, EncodedImage, ProviderRequest, ProviderResponse, RequestPart, ResponsePart,
};
use tableau_error::{ProviderError, ProviderErrorKind};
use tracing::warn;

/// Converts a provider request to a Gemini `generateContent` body.
pub fn to_generate_content_request(
    req: &ProviderRequest,
) -> Result<GenerateContentRequest, ProviderError> {
    let parts = req
        .parts()
        .iter()
        .map(|part| match part {
            RequestPart::InlineImage(image) => Part::inline(image.mime(), image.data()),
            RequestPart::Text(text) => Part::text(text.clone()),
        })
        .collect();

    let response_modalities = req
        .response_modalities()
        .iter()
        .map(|modality| modality.to_string())
        .collect();

    GenerateContentRequest::builder()
        .contents(vec![Content { role: None, parts }])
        .generation_config(GenerationConfig {
            response_modalities,
        })
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Converts a Gemini response to a provider response.
///
/// Only the first candidate is read. A response without candidates or parts
/// is valid and yields no images.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::InvalidImageData`] if an inline image is not
/// valid base64.
pub fn from_generate_content_response(
    response: GenerateContentResponse,
) -> Result<ProviderResponse, ProviderError> {
    let block_reason = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        warn!(block_reason = ?block_reason, "Gemini returned no candidates");
        return Ok(ProviderResponse::default());
    };

    let finish_reason = candidate.finish_reason;
    let parts = candidate.content.map(|content| content.parts).unwrap_or_default();
    if parts.is_empty() {
        warn!(finish_reason = ?finish_reason, "Gemini candidate has no content parts");
    }

    let mut out = Vec::with_capacity(parts.len());
    for part in parts {
        if let Some(inline) = part.inline_data {
            STANDARD.decode(inline.data.as_bytes()).map_err(|e| {
                ProviderError::new(ProviderErrorKind::InvalidImageData(e.to_string()))
            })?;
            let mime = if inline.mime_type.is_empty() {
                DEFAULT_IMAGE_MIME.to_string()
            } else {
                inline.mime_type
            };
            out.push(ResponsePart::Image(EncodedImage::new(inline.data, mime)));
        } else if let Some(text) = part.text {
            out.push(ResponsePart::Text(text));
        }
    }

    Ok(ProviderResponse::new(out))
}
