//! Concurrent multi-candidate generation.
//!
//! [`GenerationOrchestrator`] sends the same request to an
//! [`ImageProvider`](tableau_interface::ImageProvider) several times at
//! once, waits for every call to settle, and turns the settled calls into a
//! [`GenerationResult`](tableau_core::GenerationResult) or a classified
//! error.

mod aggregate;
mod metrics;
mod orchestrator;
mod policy;
mod settle;

pub use aggregate::{GENERATION_FAILURE_MESSAGE, aggregate};
pub use metrics::OrchestratorMetrics;
pub use orchestrator::{DEFAULT_CANDIDATE_COUNT, GenerationOrchestrator};
pub use policy::FailurePolicy;
pub use settle::{CallSettlement, settle_all};
