//! Gemini `generateContent` image provider.
//!
//! Sends inline reference images plus one instruction and reads inline image
//! parts from the first response candidate.

mod client;
mod conversions;
mod dto;

pub use client::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiImageClient,
};
pub use conversions::{from_generate_content_response, to_generate_content_request};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, InlineData, Part, PromptFeedback,
};
