//! Centralized error types for mailsift.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mailsift library.
#[derive(Error, Debug)]
pub enum SiftError {
    /// I/O error with the associated file path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The uploaded file name matches neither recognized container suffix.
    ///
    /// Fatal: the request is rejected as a whole.
    #[error("Unsupported container format: {0}")]
    UnsupportedContainer(String),

    /// The container format was recognized but its payload could not be decoded.
    ///
    /// Fatal: no partial `ParsedEmail` is produced.
    #[error("Container decode error: {0}")]
    ContainerDecode(String),

    /// Sniffing or extracting one attachment's content failed.
    ///
    /// Never fatal — the dispatcher captures this per item and converts it
    /// into a failed [`ExtractionOutcome`](crate::model::attachment::ExtractionOutcome).
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// No default OCR data path exists for the current operating system.
    ///
    /// Fatal, but surfaced only when OCR is actually invoked.
    #[error("Unsupported platform for OCR data path: {0}")]
    UnsupportedPlatform(String),
}

/// Convenience alias for `Result<T, SiftError>`.
pub type Result<T> = std::result::Result<T, SiftError>;

impl SiftError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
