//! Tableau: several candidate images from character and background references.
//!
//! This crate ties the workspace together. It re-exports the public types of
//! the member crates and adds what an application needs around the
//! orchestrator: configuration, a result panel with a loading flag, reference
//! file loading and candidate downloads.
//!
//! # Example
//!
//! ```no_run
//! use tableau::{DryrunProvider, GenerationOrchestrator, ReferenceAsset, ReferenceBoard};
//!
//! # async fn run() -> tableau::TableauResult<()> {
//! let board = ReferenceBoard::default()
//!     .attach_character(0, ReferenceAsset::new(vec![0x89, b'P', b'N', b'G'], "image/png"))
//!     .set_character_selected(0, true);
//! let request = board.assemble("waving")?;
//!
//! let orchestrator = GenerationOrchestrator::new(DryrunProvider);
//! let images = orchestrator.try_generate(&request, 4).await?;
//! assert_eq!(images.len(), 4);
//! # Ok(())
//! # }
//! ```

mod config;
mod download;
mod reference;
mod session;

pub use config::{
    DownloadSettings, DownloadSettingsBuilder, GenerationSettings, GenerationSettingsBuilder,
    ProviderSettings, ProviderSettingsBuilder, TableauConfig, TableauConfigBuilder,
};
pub use download::{download_file_name, save_images};
pub use reference::{load_board, load_reference};
pub use session::{LoadingFlag, LoadingGuard, ResultPanel};

pub use tableau_core::*;
pub use tableau_error::*;
pub use tableau_interface::ImageProvider;
pub use tableau_models::DryrunProvider;
pub use tableau_models::gemini::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiImageClient,
};
pub use tableau_orchestrator::{
    DEFAULT_CANDIDATE_COUNT, FailurePolicy, GENERATION_FAILURE_MESSAGE, GenerationOrchestrator,
};
