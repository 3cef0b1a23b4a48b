//! Input validation error types.

/// Reasons a generation request could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// No character slot is both selected and holding an image.
    #[display("no character reference selected")]
    NoCharacterSelected,
    /// The instruction is empty after trimming whitespace.
    #[display("empty instruction")]
    EmptyInstruction,
    /// The orchestrator was asked for zero candidates.
    #[display("candidate count must be at least 1, got {_0}")]
    InvalidCandidateCount(usize),
}

/// Validation error with location tracking.
///
/// Validation errors are raised before any provider call is launched, so they
/// are always recoverable by correcting the input.
///
/// # Examples
///
/// ```
/// use tableau_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyInstruction);
/// assert_eq!(err.kind().to_string(), "empty instruction");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl From<ValidationErrorKind> for ValidationError {
    #[track_caller]
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}
