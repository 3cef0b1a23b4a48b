//! Errors raised while aggregating generation results.

/// Message shown when every call completed but no image came back.
pub const EMPTY_RESULT_MESSAGE: &str =
    "provider returned no images; check instruction or references";

/// All calls completed without error but none of them returned an image.
///
/// This points at the content of the request (instruction, references or a
/// provider content policy) rather than at infrastructure.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Empty Result: {} ({} calls) at line {} in {}",
    EMPTY_RESULT_MESSAGE,
    calls,
    line,
    file
)]
pub struct EmptyResultError {
    calls: usize,
    line: u32,
    file: &'static str,
}

impl EmptyResultError {
    /// Create a new error for `calls` settled calls.
    #[track_caller]
    pub fn new(calls: usize) -> Self {
        let location = std::panic::Location::caller();
        Self {
            calls,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Number of calls that completed without an image.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

/// Catch-all generation failure.
///
/// `message` is safe to show to an end user. `cause` is kept for diagnostic
/// logging only.
///
/// # Examples
///
/// ```
/// use tableau_error::GenerationFailure;
///
/// let err = GenerationFailure::new("Image generation failed.", "json: EOF at 1:1");
/// assert_eq!(err.message(), "Image generation failed.");
/// assert!(err.cause().contains("EOF"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Failure: {} (cause: {}) at line {} in {}", message, cause, line, file)]
pub struct GenerationFailure {
    message: String,
    cause: String,
    line: u32,
    file: &'static str,
}

impl GenerationFailure {
    /// Create a new failure with a caller-safe message and a diagnostic cause.
    #[track_caller]
    pub fn new(message: impl Into<String>, cause: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            cause: cause.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Caller-safe message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic cause, never shown to the end user.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}
