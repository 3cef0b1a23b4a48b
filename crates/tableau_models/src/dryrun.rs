//! Offline provider that echoes a reference image back.

use async_trait::async_trait;
use tableau_core::{ProviderRequest, ProviderResponse, RequestPart};
use tableau_error::ProviderError;
use tableau_interface::ImageProvider;
use tracing::debug;

/// Provider that never touches the network.
///
/// Each call returns the first inline image of the request as its only
/// output, or a text part when the request carried no image. Useful for
/// exercising the full pipeline without an API key.
#[derive(Debug, Clone, Default)]
pub struct DryrunProvider;

#[async_trait]
impl ImageProvider for DryrunProvider {
    async fn generate_images(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let echoed = request.parts().iter().find_map(|part| match part {
            RequestPart::InlineImage(image) => Some(image.clone()),
            RequestPart::Text(_) => None,
        });
        debug!(echoed = echoed.is_some(), "Dryrun generation");

        Ok(match echoed {
            Some(image) => ProviderResponse::images([image]),
            None => ProviderResponse::text_only("dryrun: no reference image"),
        })
    }

    fn provider_name(&self) -> &'static str {
        "dryrun"
    }

    fn model_name(&self) -> &str {
        "dryrun"
    }
}
