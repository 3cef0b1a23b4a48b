//! HTTP client for Gemini image generation.

use crate::gemini::{GenerateContentResponse, conversions};
use async_trait::async_trait;
use reqwest::Client;
use tableau_core::{ProviderRequest, ProviderResponse};
use tableau_error::{ProviderError, ProviderErrorKind};
use tableau_interface::ImageProvider;
use tracing::{debug, error, instrument};

/// Default image-capable Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-image";

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable the API key is read from by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiImageClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiImageClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier, e.g. `gemini-2.5-flash-image`
    /// * `base_url` - Base URL up to and including the API version
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        debug!(model = %model, url = %base_url, "Created Gemini client");

        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client whose API key is read from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] if `api_key_env` is unset
    /// or empty.
    pub fn from_env(api_key_env: &str, model: String, base_url: String) -> Result<Self, ProviderError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::MissingApiKey(api_key_env.to_string()))
            })?;
        Ok(Self::new(api_key, model, base_url))
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Sends one generation call.
    ///
    /// # Errors
    ///
    /// Returns a transport or HTTP status error if the call is rejected, and
    /// a parsing error if the body cannot be read.
    #[instrument(skip(self, req), fields(model = %self.model, images = req.image_count()))]
    pub async fn generate(&self, req: &ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let body = conversions::to_generate_content_request(req)?;

        debug!(
            model = %self.model,
            parts = body.contents().iter().map(|c| c.parts.len()).sum::<usize>(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                model = %self.model,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(ProviderError::new(ProviderErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let text = response.text().await.map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to read response body");
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to read body: {}",
                e
            )))
        })?;

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to parse response");
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            model = %self.model,
            candidates = parsed.candidates.len(),
            "Received response"
        );

        conversions::from_generate_content_response(parsed)
    }
}

#[async_trait]
impl ImageProvider for GeminiImageClient {
    async fn generate_images(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        self.generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
