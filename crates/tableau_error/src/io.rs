//! Filesystem error types.

use std::path::{Path, PathBuf};

/// Failure to read a reference image or write a downloaded candidate.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} ({}) at line {} in {}", message, path.display(), line, file)]
pub struct IoError {
    /// Error message
    pub message: String,
    /// Path involved in the failed operation
    pub path: PathBuf,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new IoError for `path` at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: path.as_ref().to_path_buf(),
            line: location.line(),
            file: location.file(),
        }
    }
}
