//! Attachment resources and per-attachment extraction outcomes.

use std::path::{Path, PathBuf};

use crate::error::{Result, SiftError};

/// A materialized, file-backed attachment payload plus its declared name.
///
/// The declared name comes from the container and is not trusted — it is
/// used for scratch-file naming (sanitized) and for error messages only.
/// The backing file lives inside the request's scratch directory and is
/// deleted when the owning [`ParsedEmail`](crate::model::email::ParsedEmail)
/// is dropped.
#[derive(Debug, Clone)]
pub struct AttachmentResource {
    /// File name as declared inside the container.
    pub name: String,
    /// Path of the materialized payload in scratch storage.
    pub path: PathBuf,
}

impl AttachmentResource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Load the full payload from scratch storage.
    pub fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| SiftError::io(&self.path, e))
    }

    /// Path of the backing scratch file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of extracting one attachment.
///
/// Kept structured so failures stay queryable in tests and callers;
/// flattened to the documented display string only at the report boundary
/// (see [`into_display_string`](Self::into_display_string)).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// Extraction succeeded. An empty string is a valid result
    /// (e.g. a blank spreadsheet).
    Text { text: String },
    /// Extraction of this attachment failed; the batch continues.
    Failed {
        /// Declared file name of the attachment.
        attachment: String,
        /// Human-readable cause.
        message: String,
    },
}

impl ExtractionOutcome {
    /// Build a failure outcome for the given attachment.
    pub fn failed(attachment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            attachment: attachment.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Extracted text, if this outcome is a success.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Failed { .. } => None,
        }
    }

    /// Flatten to the externally visible string form.
    ///
    /// Failures render as
    /// `"Error extracting attachment from <name>: <cause>"` — a stable,
    /// documented behavior that downstream consumers rely on.
    pub fn into_display_string(self) -> String {
        match self {
            Self::Text { text } => text,
            Self::Failed {
                attachment,
                message,
            } => format!("Error extracting attachment from {attachment}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_display_is_verbatim() {
        let outcome = ExtractionOutcome::Text {
            text: "hello".into(),
        };
        assert!(outcome.is_success());
        assert_eq!(outcome.into_display_string(), "hello");
    }

    #[test]
    fn test_failure_display_names_attachment_and_cause() {
        let outcome = ExtractionOutcome::failed("report.pdf", "truncated xref table");
        assert!(!outcome.is_success());
        assert_eq!(outcome.text(), None);
        assert_eq!(
            outcome.into_display_string(),
            "Error extracting attachment from report.pdf: truncated xref table"
        );
    }
}
