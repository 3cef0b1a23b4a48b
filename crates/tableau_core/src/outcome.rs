//! Generation results and the terminal outcome of an orchestration.

use crate::EncodedImage;
use serde::{Deserialize, Serialize};
use tableau_error::{FailureKind, TableauResult};

/// Ordered generated images; position is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    images: Vec<EncodedImage>,
}

impl GenerationResult {
    /// Wrap a list of images.
    pub fn new(images: Vec<EncodedImage>) -> Self {
        Self { images }
    }

    /// Images in result order.
    pub fn images(&self) -> &[EncodedImage] {
        &self.images
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether there are no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Consume the result.
    pub fn into_images(self) -> Vec<EncodedImage> {
        self.images
    }
}

/// Terminal outcome of one orchestration.
///
/// Failures only ever carry a caller-safe message; the underlying error is
/// logged when the outcome is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Images were generated
    Success(GenerationResult),
    /// Generation failed
    Failure {
        /// Failure classification
        kind: FailureKind,
        /// Single-line message safe to show to the user
        message: String,
    },
}

impl GenerationOutcome {
    /// Whether the outcome carries images.
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }

    /// Generated images, empty on failure.
    pub fn images(&self) -> &[EncodedImage] {
        match self {
            GenerationOutcome::Success(result) => result.images(),
            GenerationOutcome::Failure { .. } => &[],
        }
    }

    /// Failure classification, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            GenerationOutcome::Success(_) => None,
            GenerationOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Failure message, if any.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Success(_) => None,
            GenerationOutcome::Failure { message, .. } => Some(message),
        }
    }
}

impl From<TableauResult<GenerationResult>> for GenerationOutcome {
    fn from(result: TableauResult<GenerationResult>) -> Self {
        match result {
            Ok(result) => GenerationOutcome::Success(result),
            Err(e) => {
                tracing::error!(error = %e, kind = %e.failure_kind(), "Generation failed");
                GenerationOutcome::Failure {
                    kind: e.failure_kind(),
                    message: e.user_message(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableau_error::{ProviderError, ProviderErrorKind, TableauError};

    #[test]
    fn failure_outcome_hides_provider_detail() {
        let err = TableauError::from(ProviderError::new(ProviderErrorKind::HttpStatus {
            status_code: 403,
            message: "API key leaked-123 is invalid".to_string(),
        }));
        let outcome = GenerationOutcome::from(Err(err));

        assert_eq!(outcome.failure_kind(), Some(FailureKind::Provider));
        let message = outcome.failure_message().unwrap_or_default();
        assert!(!message.contains("leaked-123"));
        assert!(outcome.images().is_empty());
    }

    #[test]
    fn success_outcome_serializes_with_status_tag() {
        let outcome = GenerationOutcome::Success(GenerationResult::new(vec![EncodedImage::new(
            "AAAA",
            "image/png",
        )]));
        let json = serde_json::to_value(&outcome).expect("serialize outcome");
        assert_eq!(json["status"], "success");
        assert_eq!(json["images"][0]["data"], "AAAA");
    }
}
