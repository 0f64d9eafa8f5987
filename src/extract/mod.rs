//! Attachment extraction: sniffing, routing, and per-item failure isolation.
//!
//! [`extract_all`] walks the attachment list in order and produces an
//! outcome list of exactly the same length, with each failure captured in
//! place so one corrupt attachment never aborts the batch or shifts the
//! positional correspondence downstream stages rely on.

pub mod delimited;
pub mod docx;
pub mod fallback;
pub mod image;
pub mod pdf;
pub mod sniff;
pub mod spreadsheet;

use crate::error::Result;
use crate::model::attachment::{AttachmentResource, ExtractionOutcome};

/// Coarse content category used to select an extraction strategy.
///
/// Produced from the sniffed MIME type, never from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFamily {
    /// Raster image: OCR extraction.
    Image,
    /// OOXML or legacy binary spreadsheet.
    Spreadsheet,
    /// CSV-style delimited text: verbatim line pass-through.
    Delimited,
    /// PDF document.
    Pdf,
    /// OOXML word-processing document.
    WordDoc,
    /// Everything else: best-effort text conversion.
    Generic,
}

impl ContentFamily {
    /// Map a sniffed MIME type to its content family.
    ///
    /// First match wins, in the documented precedence order.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime == sniff::MIME_XLSX || mime == sniff::MIME_XLS {
            Self::Spreadsheet
        } else if mime == "text/csv" || mime == "application/csv" {
            Self::Delimited
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if mime == sniff::MIME_DOCX {
            Self::WordDoc
        } else {
            Self::Generic
        }
    }
}

/// Extract text from every attachment, preserving input order.
///
/// The result always has the same length as `attachments`, with
/// `result[i]` corresponding to `attachments[i]`. Errors are captured per
/// item; this function itself never fails.
pub fn extract_all(attachments: &[AttachmentResource]) -> Vec<ExtractionOutcome> {
    attachments
        .iter()
        .map(|resource| match extract_one(resource) {
            Ok(text) => ExtractionOutcome::Text { text },
            Err(e) => {
                tracing::warn!(
                    attachment = %resource.name,
                    error = %e,
                    "Attachment extraction failed"
                );
                // Use the bare cause for Extraction errors; other variants
                // keep their full rendering.
                let message = match e {
                    crate::error::SiftError::Extraction(msg) => msg,
                    other => other.to_string(),
                };
                ExtractionOutcome::failed(&resource.name, message)
            }
        })
        .collect()
}

/// Sniff one attachment and route it to its extraction strategy.
fn extract_one(resource: &AttachmentResource) -> Result<String> {
    let bytes = resource.read()?;
    let mime = sniff::sniff_mime(&bytes);
    let family = ContentFamily::from_mime(&mime);
    tracing::debug!(attachment = %resource.name, %mime, ?family, "Routing attachment");

    match family {
        ContentFamily::Image => image::extract(&bytes),
        ContentFamily::Spreadsheet => spreadsheet::extract(resource.path()),
        ContentFamily::Delimited => delimited::extract(&bytes),
        ContentFamily::Pdf => pdf::extract(resource.path()),
        ContentFamily::WordDoc => docx::extract(resource.path()),
        ContentFamily::Generic => fallback::extract(&bytes),
    }
}
