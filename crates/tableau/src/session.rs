//! The result panel: what the user sees for the latest generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tableau_core::{EncodedImage, GenerationOutcome, ReferenceBoard};
use tableau_error::{FailureKind, TableauError};
use tableau_interface::ImageProvider;
use tableau_orchestrator::GenerationOrchestrator;
use tracing::{debug, instrument};

/// Shared "generation in progress" flag.
///
/// Clones observe the same flag, so a renderer can watch it while the panel
/// is busy generating.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    /// Whether a generation is in progress.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn raise(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(Arc::clone(&self.0))
    }
}

/// Clears its [`LoadingFlag`] when dropped.
///
/// Dropping happens on every exit path, including an error return or the
/// generating future being cancelled.
#[derive(Debug)]
pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// State of the result panel.
#[derive(Debug, Default)]
pub struct ResultPanel {
    images: Vec<EncodedImage>,
    error: Option<(FailureKind, String)>,
    loading: LoadingFlag,
}

impl ResultPanel {
    /// An empty, idle panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Images from the last successful generation.
    pub fn images(&self) -> &[EncodedImage] {
        &self.images
    }

    /// Caller-safe message from the last failed generation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|(_, message)| message.as_str())
    }

    /// Classification of the last failure.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(|(kind, _)| *kind)
    }

    /// Whether a generation is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    /// A handle on the loading flag for observers.
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Assemble a request from `board` and run one generation.
    ///
    /// Previous images and errors are cleared first. The loading flag is
    /// raised for the duration and cleared on every exit path. Validation
    /// failures reach the panel without any provider call.
    #[instrument(skip_all, fields(candidates = candidate_count))]
    pub async fn generate<P>(
        &mut self,
        orchestrator: &GenerationOrchestrator<P>,
        board: &ReferenceBoard,
        instruction: &str,
        candidate_count: usize,
    ) -> GenerationOutcome
    where
        P: ImageProvider + ?Sized,
    {
        self.images.clear();
        self.error = None;
        let _loading = self.loading.raise();

        let outcome = match board.assemble(instruction) {
            Ok(request) => orchestrator.generate(&request, candidate_count).await,
            Err(e) => GenerationOutcome::from(Err(TableauError::from(e))),
        };

        self.show(&outcome);
        outcome
    }

    /// Replace the panel contents with `outcome`.
    pub fn show(&mut self, outcome: &GenerationOutcome) {
        match outcome {
            GenerationOutcome::Success(result) => {
                debug!(images = result.len(), "Showing generated images");
                self.images = result.images().to_vec();
                self.error = None;
            }
            GenerationOutcome::Failure { kind, message } => {
                self.images.clear();
                self.error = Some((*kind, message.clone()));
            }
        }
    }
}
