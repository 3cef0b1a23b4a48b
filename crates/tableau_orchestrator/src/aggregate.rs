//! Aggregation and failure classification of settled calls.

use crate::{CallSettlement, FailurePolicy};
use tableau_core::GenerationResult;
use tableau_error::{EmptyResultError, GenerationFailure, ProviderError, TableauResult};
use tracing::{error, warn};

/// Message shown when a call completed with a body that could not be used.
pub const GENERATION_FAILURE_MESSAGE: &str = "Image generation failed. Please try again.";

/// Combine settled calls into a result.
///
/// `settlements` must be in completion order; images keep that order and
/// the list is cut to `candidate_count`.
///
/// Classification, after every call has settled:
/// - a provider rejection fails with that provider error (the first one to
///   settle), even if siblings returned images;
/// - an unusable response body fails with a [`GenerationFailure`];
/// - no errors and no images fails with an [`EmptyResultError`].
///
/// Under [`FailurePolicy::PartialSuccess`] any non-empty set of images is
/// returned and call errors are only logged.
pub fn aggregate(
    settlements: Vec<CallSettlement>,
    candidate_count: usize,
    policy: FailurePolicy,
) -> TableauResult<GenerationResult> {
    let calls = settlements.len();
    let mut images = Vec::new();
    let mut rejection: Option<ProviderError> = None;
    let mut unusable: Option<ProviderError> = None;

    for settlement in settlements {
        let call = *settlement.call();
        match settlement.into_result() {
            Ok(response) => {
                if response.image_count() == 0 {
                    warn!(call, "A generation call completed but returned no image parts");
                }
                images.extend(response.into_images());
            }
            Err(e) => {
                error!(call, error = %e, "Generation call failed");
                if e.kind().is_rejection() {
                    rejection.get_or_insert(e);
                } else {
                    unusable.get_or_insert(e);
                }
            }
        }
    }

    if policy == FailurePolicy::PartialSuccess && !images.is_empty() {
        if rejection.is_some() || unusable.is_some() {
            warn!(images = images.len(), "Returning partial results");
        }
        images.truncate(candidate_count);
        return Ok(GenerationResult::new(images));
    }

    if let Some(e) = rejection {
        return Err(e.into());
    }

    if let Some(e) = unusable {
        return Err(GenerationFailure::new(GENERATION_FAILURE_MESSAGE, e.to_string()).into());
    }

    if images.is_empty() {
        return Err(EmptyResultError::new(calls).into());
    }

    images.truncate(candidate_count);
    Ok(GenerationResult::new(images))
}
