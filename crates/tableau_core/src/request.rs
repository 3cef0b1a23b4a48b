//! Request and response types exchanged with an image provider.

use crate::{EncodedImage, InstructionTemplate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Canonical, provider-agnostic generation request.
///
/// Only the input assembler constructs this type, which guarantees at least
/// one character image and a non-blank instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GenerationRequest {
    /// Encoded character references, in slot order
    characters: Vec<EncodedImage>,
    /// Encoded background, present only when it is used
    background: Option<EncodedImage>,
    /// Use flag as set by the user
    use_background: bool,
    /// Instruction as typed by the user
    instruction: String,
    /// Template wrapped around the instruction
    template: InstructionTemplate,
    /// Final prompt text sent to the provider
    prompt: String,
}

impl GenerationRequest {
    pub(crate) fn new(
        characters: Vec<EncodedImage>,
        background: Option<EncodedImage>,
        use_background: bool,
        instruction: String,
        template: InstructionTemplate,
    ) -> Self {
        let prompt = template.render(&instruction);
        Self {
            characters,
            background,
            use_background,
            instruction,
            template,
            prompt,
        }
    }

    /// Build one provider call body.
    ///
    /// Image parts come first (characters, then the background if used),
    /// followed by a single text part. Encoded data is shared, not copied.
    pub fn provider_request(&self) -> ProviderRequest {
        let mut parts: Vec<RequestPart> = self
            .characters
            .iter()
            .cloned()
            .map(RequestPart::InlineImage)
            .collect();
        if let Some(background) = &self.background {
            parts.push(RequestPart::InlineImage(background.clone()));
        }
        parts.push(RequestPart::Text(self.prompt.clone()));

        ProviderRequest {
            parts,
            response_modalities: vec![Modality::Image, Modality::Text],
        }
    }
}

/// Response modality a provider may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Image output
    Image,
    /// Text output
    Text,
}

/// One part of a provider request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RequestPart {
    /// Inline base64 image
    InlineImage(EncodedImage),
    /// Instruction text
    Text(String),
}

/// Body of a single provider call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ProviderRequest {
    /// Ordered request parts
    parts: Vec<RequestPart>,
    /// Modalities the provider may answer with
    response_modalities: Vec<Modality>,
}

impl ProviderRequest {
    /// Number of inline image parts.
    pub fn image_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, RequestPart::InlineImage(_)))
            .count()
    }

    /// The instruction text part, if any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            RequestPart::Text(text) => Some(text.as_str()),
            RequestPart::InlineImage(_) => None,
        })
    }
}

/// One part of a provider response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ResponsePart {
    /// Generated image
    Image(EncodedImage),
    /// Text the model chose to return
    Text(String),
}

/// Everything a single provider call returned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Response parts in provider order
    pub parts: Vec<ResponsePart>,
}

impl ProviderResponse {
    /// Create a response from parts.
    pub fn new(parts: Vec<ResponsePart>) -> Self {
        Self { parts }
    }

    /// Response with only image parts.
    pub fn images(images: impl IntoIterator<Item = EncodedImage>) -> Self {
        Self::new(images.into_iter().map(ResponsePart::Image).collect())
    }

    /// Response with a single text part and no image.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(vec![ResponsePart::Text(text.into())])
    }

    /// Number of image parts.
    pub fn image_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, ResponsePart::Image(_)))
            .count()
    }

    /// Consume the response, keeping only image parts in order.
    pub fn into_images(self) -> Vec<EncodedImage> {
        self.parts
            .into_iter()
            .filter_map(|part| match part {
                ResponsePart::Image(image) => Some(image),
                ResponsePart::Text(_) => None,
            })
            .collect()
    }
}
