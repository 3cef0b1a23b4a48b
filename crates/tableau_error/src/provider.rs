//! Provider error types.

/// Conditions reported by an image-generation provider call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// API key not found in the environment
    MissingApiKey(String),
    /// Request never reached the provider or the connection dropped
    Transport(String),
    /// Provider answered with a non-success HTTP status
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// Request body could not be built
    InvalidRequest(String),
    /// Response body could not be parsed
    ResponseParsing(String),
    /// Response contained an image part that is not valid base64
    InvalidImageData(String),
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderErrorKind::MissingApiKey(var) => {
                write!(f, "{} environment variable not set", var)
            }
            ProviderErrorKind::Transport(msg) => write!(f, "Provider request failed: {}", msg),
            ProviderErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            ProviderErrorKind::InvalidRequest(msg) => {
                write!(f, "Invalid provider request: {}", msg)
            }
            ProviderErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse provider response: {}", msg)
            }
            ProviderErrorKind::InvalidImageData(msg) => {
                write!(f, "Provider returned invalid image data: {}", msg)
            }
        }
    }
}

impl ProviderErrorKind {
    /// Whether the provider rejected the call outright.
    ///
    /// Rejections are infrastructure failures: a missing key, a transport
    /// error or a non-success HTTP status.
    /// The remaining kinds mean the call completed but its body was unusable.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ProviderErrorKind::MissingApiKey(_)
                | ProviderErrorKind::Transport(_)
                | ProviderErrorKind::HttpStatus { .. }
        )
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use tableau_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingApiKey("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind().is_rejection());
/// ```
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Provider Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ProviderError {}
