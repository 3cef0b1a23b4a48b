//! OpenTelemetry instruments for generation calls.
//!
//! Instruments come from the global meter provider, so they are no-ops until
//! the embedding application installs one.

use crate::CallSettlement;
use opentelemetry::metrics::{Counter, Histogram};
use opentelemetry::{KeyValue, global};

/// Counters and histograms recorded by the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorMetrics {
    calls_launched: Counter<u64>,
    calls_failed: Counter<u64>,
    images_returned: Counter<u64>,
    call_latency_ms: Histogram<f64>,
}

impl Default for OrchestratorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl OrchestratorMetrics {
    /// Create instruments on the `tableau_orchestrator` meter.
    pub fn new() -> Self {
        let meter = global::meter("tableau_orchestrator");
        Self {
            calls_launched: meter
                .u64_counter("generation_calls_launched")
                .with_description("Provider calls launched")
                .build(),
            calls_failed: meter
                .u64_counter("generation_calls_failed")
                .with_description("Provider calls that returned an error")
                .build(),
            images_returned: meter
                .u64_counter("generation_images_returned")
                .with_description("Images returned by successful provider calls")
                .build(),
            call_latency_ms: meter
                .f64_histogram("generation_call_latency_ms")
                .with_description("Time from launch to settlement of one provider call")
                .with_unit("ms")
                .build(),
        }
    }

    /// Record a batch of launched calls.
    pub fn record_launch(&self, provider: &'static str, count: usize) {
        self.calls_launched
            .add(count as u64, &[KeyValue::new("provider", provider)]);
    }

    /// Record one settled call.
    pub fn record_settlement(&self, provider: &'static str, settlement: &CallSettlement) {
        let attrs = [KeyValue::new("provider", provider)];
        self.call_latency_ms
            .record(settlement.elapsed().as_secs_f64() * 1000.0, &attrs);
        match settlement.result() {
            Ok(response) => self
                .images_returned
                .add(response.image_count() as u64, &attrs),
            Err(_) => self.calls_failed.add(1, &attrs),
        }
    }
}
