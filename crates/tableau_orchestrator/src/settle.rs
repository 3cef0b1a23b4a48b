//! Concurrent fan-out with an all-settle join.

use derive_getters::Getters;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::time::Duration;
use tableau_core::{GenerationRequest, ProviderResponse};
use tableau_error::ProviderError;
use tableau_interface::ImageProvider;
use tokio::time::Instant;
use tracing::{debug, trace};

/// How one provider call ended.
#[derive(Debug, Getters)]
pub struct CallSettlement {
    /// Launch index of the call
    call: usize,
    /// Position in completion order, starting at zero
    completed: usize,
    /// Time from launch to settlement
    elapsed: Duration,
    /// Response or error
    result: Result<ProviderResponse, ProviderError>,
}

impl CallSettlement {
    /// Build a settlement by hand.
    pub fn new(
        call: usize,
        completed: usize,
        elapsed: Duration,
        result: Result<ProviderResponse, ProviderError>,
    ) -> Self {
        Self {
            call,
            completed,
            elapsed,
            result,
        }
    }

    /// Consume the settlement, keeping the result.
    pub fn into_result(self) -> Result<ProviderResponse, ProviderError> {
        self.result
    }
}

/// Launch `count` identical calls at once and wait for all of them.
///
/// Every call builds and owns its request body. The calls are polled
/// together on the current task and the returned settlements are in
/// completion order. There is no early return: a slow call holds the join
/// until it settles.
pub async fn settle_all<P>(
    provider: &P,
    request: &GenerationRequest,
    count: usize,
) -> Vec<CallSettlement>
where
    P: ImageProvider + ?Sized,
{
    let mut in_flight: FuturesUnordered<_> = (0..count)
        .map(|call| {
            let body = request.provider_request();
            async move {
                let started = Instant::now();
                trace!(call, "Launching generation call");
                let result = provider.generate_images(&body).await;
                (call, started.elapsed(), result)
            }
        })
        .collect();

    let mut settled = Vec::with_capacity(count);
    while let Some((call, elapsed, result)) = in_flight.next().await {
        debug!(
            call,
            completed = settled.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            ok = result.is_ok(),
            "Generation call settled"
        );
        settled.push(CallSettlement::new(call, settled.len(), elapsed, result));
    }

    settled
}
