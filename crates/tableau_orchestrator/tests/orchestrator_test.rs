use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tableau_core::{
    EncodedImage, GenerationOutcome, GenerationRequest, ProviderRequest, ProviderResponse,
    ReferenceAsset, ReferenceBoard,
};
use tableau_error::{FailureKind, PROVIDER_FAILURE_MESSAGE, ProviderError, ProviderErrorKind};
use tableau_interface::ImageProvider;
use tableau_orchestrator::{
    DEFAULT_CANDIDATE_COUNT, FailurePolicy, GENERATION_FAILURE_MESSAGE, GenerationOrchestrator,
};
use tokio::time::{Instant, sleep};

/// One scripted call: how long it takes and what it returns.
#[derive(Clone)]
struct Step {
    delay_ms: u64,
    result: Result<Vec<&'static str>, ProviderErrorKind>,
}

fn images(delay_ms: u64, data: &[&'static str]) -> Step {
    Step {
        delay_ms,
        result: Ok(data.to_vec()),
    }
}

fn fails(delay_ms: u64, kind: ProviderErrorKind) -> Step {
    Step {
        delay_ms,
        result: Err(kind),
    }
}

/// Fake provider that hands out scripted steps in launch order.
struct ScriptedProvider {
    steps: Vec<Step>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    seen: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn uniform(count: usize, step: Step) -> Self {
        Self::new(vec![step; count])
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProvider for ScriptedProvider {
    async fn generate_images(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let step = self.steps[index % self.steps.len()].clone();
        sleep(Duration::from_millis(step.delay_ms)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match step.result {
            Ok(data) => Ok(ProviderResponse::images(
                data.into_iter().map(|d| EncodedImage::new(d, "image/png")),
            )),
            Err(kind) => Err(ProviderError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

fn request() -> GenerationRequest {
    ReferenceBoard::default()
        .attach_character(0, ReferenceAsset::new(vec![1, 2, 3], "image/png"))
        .set_character_selected(0, true)
        .assemble("waving at the camera")
        .expect("valid board")
}

fn data(outcome: &GenerationOutcome) -> Vec<&str> {
    outcome.images().iter().map(EncodedImage::data).collect()
}

#[tokio::test(start_paused = true)]
async fn test_calls_run_concurrently() {
    let provider = ScriptedProvider::new(vec![
        images(30, &["a"]),
        images(10, &["b"]),
        images(20, &["c"]),
        images(40, &["d"]),
    ]);
    let orchestrator = GenerationOrchestrator::new(provider);

    let started = Instant::now();
    let outcome = orchestrator
        .generate(&request(), DEFAULT_CANDIDATE_COUNT)
        .await;
    let elapsed = started.elapsed();

    assert!(outcome.is_success());
    assert_eq!(orchestrator.provider().calls(), 4);
    assert_eq!(orchestrator.provider().max_in_flight(), 4);
    // Bounded by the slowest call, not the sum of all delays
    assert!(elapsed >= Duration::from_millis(40));
    assert!(elapsed < Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_every_call_gets_an_identical_body() {
    let orchestrator =
        GenerationOrchestrator::new(ScriptedProvider::uniform(4, images(5, &["x"])));
    let request = request();

    orchestrator.generate(&request, 4).await;

    let seen = orchestrator.provider().seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 4);
    for body in &seen {
        assert_eq!(*body, request.provider_request());
    }
}

#[tokio::test(start_paused = true)]
async fn test_images_are_in_completion_order_and_truncated() {
    let provider = ScriptedProvider::new(vec![
        images(30, &["a1", "a2"]),
        images(10, &["b1", "b2"]),
        images(20, &["c1"]),
        images(40, &["d1"]),
    ]);
    let orchestrator = GenerationOrchestrator::new(provider);

    let outcome = orchestrator.generate(&request(), 4).await;

    assert_eq!(data(&outcome), vec!["b1", "b2", "c1", "a1"]);
}

#[tokio::test(start_paused = true)]
async fn test_successful_calls_without_images_are_an_empty_result() {
    let orchestrator = GenerationOrchestrator::new(ScriptedProvider::uniform(4, images(5, &[])));

    let outcome = orchestrator.generate(&request(), 4).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.failure_kind(), Some(FailureKind::EmptyResult));
    assert!(outcome.images().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_single_rejection_fails_the_generation() {
    let provider = ScriptedProvider::new(vec![
        images(10, &["a"]),
        images(10, &["b"]),
        fails(
            20,
            ProviderErrorKind::HttpStatus {
                status_code: 500,
                message: "backend exploded at 10.0.0.3".to_string(),
            },
        ),
        images(10, &["d"]),
    ]);
    let orchestrator = GenerationOrchestrator::new(provider);

    let outcome = orchestrator.generate(&request(), 4).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::Provider));
    assert_eq!(outcome.failure_message(), Some(PROVIDER_FAILURE_MESSAGE));
    assert!(outcome.images().is_empty());
    // The join waited for every call
    assert_eq!(orchestrator.provider().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_partial_success_keeps_sibling_images() {
    let steps = vec![
        images(10, &["a"]),
        fails(5, ProviderErrorKind::Transport("connection reset".to_string())),
        images(20, &["c"]),
        images(30, &["d"]),
    ];

    let strict = GenerationOrchestrator::new(ScriptedProvider::new(steps.clone()));
    let lenient = GenerationOrchestrator::new(ScriptedProvider::new(steps))
        .with_policy(FailurePolicy::PartialSuccess);

    let strict_outcome = strict.generate(&request(), 4).await;
    let lenient_outcome = lenient.generate(&request(), 4).await;

    assert_eq!(strict_outcome.failure_kind(), Some(FailureKind::Provider));
    assert!(lenient_outcome.is_success());
    assert_eq!(data(&lenient_outcome), vec!["a", "c", "d"]);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_body_is_a_generation_failure() {
    let provider = ScriptedProvider::new(vec![
        images(10, &["a"]),
        fails(10, ProviderErrorKind::ResponseParsing("expected value".to_string())),
    ]);
    let orchestrator = GenerationOrchestrator::new(provider);

    let outcome = orchestrator.generate(&request(), 2).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::GenerationFailure));
    assert_eq!(outcome.failure_message(), Some(GENERATION_FAILURE_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn test_zero_candidates_is_rejected_without_calls() {
    let orchestrator = GenerationOrchestrator::new(ScriptedProvider::uniform(1, images(5, &["a"])));

    let err = orchestrator
        .try_generate(&request(), 0)
        .await
        .expect_err("zero candidates");

    assert_eq!(err.failure_kind(), FailureKind::Validation);
    assert_eq!(orchestrator.provider().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_validation_failure_never_reaches_provider() {
    let orchestrator = GenerationOrchestrator::new(ScriptedProvider::uniform(1, images(5, &["a"])));
    let board = ReferenceBoard::default()
        .attach_character(0, ReferenceAsset::new(vec![1, 2, 3], "image/png"));

    // Slot holds an image but is not selected
    assert!(board.assemble("waving").is_err());
    assert!(!board.can_generate("waving"));
    assert_eq!(orchestrator.provider().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shared_provider_serves_concurrent_generations() {
    let provider = std::sync::Arc::new(ScriptedProvider::uniform(1, images(10, &["x"])));
    let first = GenerationOrchestrator::from_arc(provider.clone());
    let second = first.clone().with_policy(FailurePolicy::PartialSuccess);
    let request = request();

    let (a, b) = tokio::join!(first.generate(&request, 2), second.generate(&request, 3));

    assert_eq!(a.images().len(), 2);
    assert_eq!(b.images().len(), 3);
    assert_eq!(provider.calls(), 5);
}
