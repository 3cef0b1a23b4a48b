use async_trait::async_trait;
use std::sync::Arc;
use tableau_core::{ProviderRequest, ProviderResponse};
use tableau_error::ProviderError;

/// A backend that turns one request body into zero or more images.
///
/// Implementations must be safe to call concurrently: the orchestrator issues
/// several identical requests at once and relies on the backend's own
/// randomness to make the candidates differ.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Perform one generation call.
    ///
    /// A response with no image parts is a valid answer (for example a text
    /// refusal). Errors mean the call itself failed.
    async fn generate_images(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<P: ImageProvider + ?Sized> ImageProvider for Arc<P> {
    async fn generate_images(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        (**self).generate_images(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<P: ImageProvider + ?Sized> ImageProvider for Box<P> {
    async fn generate_images(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        (**self).generate_images(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
