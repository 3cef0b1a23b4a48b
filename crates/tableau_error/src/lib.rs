//! Error types for the Tableau image generation orchestrator.
//!
//! Every error struct records the file and line where it was created. The
//! umbrella [`TableauError`] boxes a [`TableauErrorKind`] and knows how to
//! describe itself to an end user without leaking provider internals.

mod config;
mod generation;
mod io;
mod provider;
mod validation;

pub use config::ConfigError;
pub use generation::{EMPTY_RESULT_MESSAGE, EmptyResultError, GenerationFailure};
pub use io::IoError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

use serde::{Deserialize, Serialize};

/// Message shown to the user whenever the provider rejected a call.
pub const PROVIDER_FAILURE_MESSAGE: &str =
    "Failed to generate images. Please check the logs for more details.";

/// Coarse failure classification surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Caller input was incomplete
    #[display("validation")]
    Validation,
    /// The provider rejected or could not complete a call
    #[display("provider")]
    Provider,
    /// Calls succeeded but produced no image
    #[display("empty_result")]
    EmptyResult,
    /// Any other failure
    #[display("generation_failure")]
    GenerationFailure,
}

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum TableauErrorKind {
    /// Input validation error
    Validation(ValidationError),
    /// Provider rejected a call
    Provider(ProviderError),
    /// No images returned
    EmptyResult(EmptyResultError),
    /// Generic generation failure
    Generation(GenerationFailure),
    /// Configuration error
    Config(ConfigError),
    /// Filesystem error
    Io(IoError),
}

impl std::fmt::Display for TableauErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableauErrorKind::Validation(e) => write!(f, "{}", e),
            TableauErrorKind::Provider(e) => write!(f, "{}", e),
            TableauErrorKind::EmptyResult(e) => write!(f, "{}", e),
            TableauErrorKind::Generation(e) => write!(f, "{}", e),
            TableauErrorKind::Config(e) => write!(f, "{}", e),
            TableauErrorKind::Io(e) => write!(f, "{}", e),
        }
    }
}

/// Tableau error with kind discrimination.
#[derive(Debug)]
pub struct TableauError(Box<TableauErrorKind>);

impl TableauError {
    /// Create a new error from a kind.
    pub fn new(kind: TableauErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TableauErrorKind {
        &self.0
    }

    /// Classification used by [`FailureKind`]-aware callers.
    ///
    /// Configuration and filesystem problems are reported as generic
    /// generation failures.
    pub fn failure_kind(&self) -> FailureKind {
        match self.kind() {
            TableauErrorKind::Validation(_) => FailureKind::Validation,
            TableauErrorKind::Provider(_) => FailureKind::Provider,
            TableauErrorKind::EmptyResult(_) => FailureKind::EmptyResult,
            TableauErrorKind::Generation(_)
            | TableauErrorKind::Config(_)
            | TableauErrorKind::Io(_) => FailureKind::GenerationFailure,
        }
    }

    /// Single-line message that is safe to show to an end user.
    ///
    /// # Examples
    ///
    /// ```
    /// use tableau_error::{
    ///     PROVIDER_FAILURE_MESSAGE, ProviderError, ProviderErrorKind, TableauError,
    /// };
    ///
    /// let err = TableauError::from(ProviderError::new(ProviderErrorKind::HttpStatus {
    ///     status_code: 500,
    ///     message: "internal detail".to_string(),
    /// }));
    /// assert_eq!(err.user_message(), PROVIDER_FAILURE_MESSAGE);
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            TableauErrorKind::Validation(e) => e.kind().to_string(),
            TableauErrorKind::Provider(_) => PROVIDER_FAILURE_MESSAGE.to_string(),
            TableauErrorKind::EmptyResult(_) => EMPTY_RESULT_MESSAGE.to_string(),
            TableauErrorKind::Generation(e) => e.message().to_string(),
            TableauErrorKind::Config(_) => "Invalid configuration.".to_string(),
            TableauErrorKind::Io(e) => format!("Could not access {}.", e.path.display()),
        }
    }
}

impl std::fmt::Display for TableauError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tableau Error: {}", self.0)
    }
}

impl std::error::Error for TableauError {}

// Generic From implementation for any type that converts to TableauErrorKind
impl<T> From<T> for TableauError
where
    T: Into<TableauErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tableau operations.
pub type TableauResult<T> = std::result::Result<T, TableauError>;
