//! Generate command handler.

use super::GenerateArgs;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tableau::{
    DryrunProvider, FailureKind, GeminiImageClient, GenerationFailure, GenerationOrchestrator,
    GenerationOutcome, ImageProvider, ResultPanel, TableauConfig, TableauError, TableauResult,
    load_board, save_images,
};
use tracing::{info, instrument, warn};

/// Message shown when the whole generation exceeded its timeout.
const TIMEOUT_MESSAGE: &str = "Image generation timed out. Please try again.";

/// Summary printed once the command finishes.
#[derive(Debug, Serialize)]
struct GenerateReport {
    success: bool,
    images: usize,
    files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Handles the generate command.
///
/// Command-line values override `config`. Returns whether images were
/// generated; a failed generation is reported, not returned as an error.
///
/// # Errors
///
/// Returns an error if a reference image cannot be loaded, the provider
/// cannot be created, or candidates cannot be saved.
#[instrument(skip_all, fields(characters = args.characters.len(), dry_run = args.dry_run))]
pub async fn handle_generate_command(
    args: GenerateArgs,
    config: &TableauConfig,
) -> TableauResult<bool> {
    let candidate_count = args
        .count
        .unwrap_or(*config.generation().candidate_count());
    let policy = args
        .policy
        .unwrap_or(*config.generation().failure_policy());
    let timeout = args
        .timeout_secs
        .map(std::time::Duration::from_secs)
        .or_else(|| config.generation().timeout());
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.download().output_dir().clone());

    let board = load_board(
        &args.characters,
        args.background.as_deref(),
        args.use_background,
    )
    .await?;

    let provider: Arc<dyn ImageProvider> = if args.dry_run {
        Arc::new(DryrunProvider)
    } else {
        let model = args
            .model
            .clone()
            .unwrap_or_else(|| config.provider().model().clone());
        Arc::new(GeminiImageClient::from_env(
            config.provider().api_key_env(),
            model,
            config.provider().base_url().clone(),
        )?)
    };
    let orchestrator = GenerationOrchestrator::from_arc(provider).with_policy(policy);

    info!(
        candidates = candidate_count,
        policy = %policy,
        use_background = *board.background().use_background(),
        "Starting generation"
    );

    let mut panel = ResultPanel::new();
    let run = panel.generate(&orchestrator, &board, &args.prompt, candidate_count);
    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, run).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(timeout_secs = limit.as_secs(), "Generation timed out");
                GenerationOutcome::from(Err(TableauError::from(GenerationFailure::new(
                    TIMEOUT_MESSAGE,
                    format!("no result after {:?}", limit),
                ))))
            }
        },
        None => run.await,
    };
    panel.show(&outcome);

    let files = if outcome.is_success() {
        save_images(panel.images(), &output_dir, config.download().file_prefix())?
    } else {
        Vec::new()
    };

    let report = GenerateReport {
        success: outcome.is_success(),
        images: panel.images().len(),
        files,
        kind: panel.failure_kind(),
        message: panel.error().map(str::to_string),
    };
    print_report(&report, args.json);

    Ok(report.success)
}

fn print_report(report: &GenerateReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{}", text),
            Err(e) => warn!(error = %e, "Failed to serialize report"),
        }
        return;
    }

    if report.success {
        println!("Generated {} image(s):", report.images);
        for file in &report.files {
            println!("  {}", file.display());
        }
    } else if let Some(message) = &report.message {
        eprintln!("{}", message);
    }
}
