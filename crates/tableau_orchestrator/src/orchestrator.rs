//! The generation orchestrator.

use crate::{FailurePolicy, OrchestratorMetrics, aggregate, settle_all};
use std::sync::Arc;
use tableau_core::{GenerationOutcome, GenerationRequest, GenerationResult};
use tableau_error::{TableauResult, ValidationError, ValidationErrorKind};
use tableau_interface::ImageProvider;
use tokio::time::Instant;
use tracing::{info, instrument};

/// Number of candidates requested per generation by default.
pub const DEFAULT_CANDIDATE_COUNT: usize = 4;

/// Issues several independent generation calls and aggregates their images.
///
/// The orchestrator keeps no state between invocations, so one instance can
/// serve any number of concurrent generations.
pub struct GenerationOrchestrator<P: ?Sized> {
    provider: Arc<P>,
    policy: FailurePolicy,
    metrics: OrchestratorMetrics,
}

impl<P: ?Sized> Clone for GenerationOrchestrator<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            policy: self.policy,
            metrics: self.metrics.clone(),
        }
    }
}

impl<P: ImageProvider + ?Sized> std::fmt::Debug for GenerationOrchestrator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationOrchestrator")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model_name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<P: ImageProvider> GenerationOrchestrator<P> {
    /// Creates an orchestrator that owns `provider`.
    pub fn new(provider: P) -> Self {
        Self::from_arc(Arc::new(provider))
    }
}

impl<P: ImageProvider + ?Sized> GenerationOrchestrator<P> {
    /// Creates an orchestrator around a shared provider.
    pub fn from_arc(provider: Arc<P>) -> Self {
        Self {
            provider,
            policy: FailurePolicy::default(),
            metrics: OrchestratorMetrics::new(),
        }
    }

    /// Sets the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The failure policy in effect.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate `candidate_count` candidates and return them or a typed error.
    ///
    /// All calls are launched at once and every one of them settles before
    /// the result is classified. No timeout is applied here; wrap the future
    /// if bounded latency is needed.
    ///
    /// # Errors
    ///
    /// - Validation error if `candidate_count` is zero (no call is made).
    /// - Provider error if any call is rejected.
    /// - Generation failure if a call returned an unusable body.
    /// - Empty result error if no call returned an image.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.provider.provider_name(),
            model = %self.provider.model_name(),
            candidates = candidate_count,
            policy = %self.policy
        )
    )]
    pub async fn try_generate(
        &self,
        request: &GenerationRequest,
        candidate_count: usize,
    ) -> TableauResult<GenerationResult> {
        if candidate_count == 0 {
            return Err(ValidationError::new(ValidationErrorKind::InvalidCandidateCount(0)).into());
        }

        let provider_name = self.provider.provider_name();
        let started = Instant::now();
        self.metrics.record_launch(provider_name, candidate_count);

        let settlements = settle_all(self.provider.as_ref(), request, candidate_count).await;
        for settlement in &settlements {
            self.metrics.record_settlement(provider_name, settlement);
        }

        let result = aggregate(settlements, candidate_count, self.policy)?;
        info!(
            images = result.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generation complete"
        );
        Ok(result)
    }

    /// Generate candidates and fold any error into a caller-safe outcome.
    ///
    /// The full error is logged; the outcome only carries the failure kind
    /// and a message suitable for the end user.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        candidate_count: usize,
    ) -> GenerationOutcome {
        GenerationOutcome::from(self.try_generate(request, candidate_count).await)
    }

    /// [`generate`](Self::generate) with [`DEFAULT_CANDIDATE_COUNT`].
    pub async fn generate_default(&self, request: &GenerationRequest) -> GenerationOutcome {
        self.generate(request, DEFAULT_CANDIDATE_COUNT).await
    }
}
