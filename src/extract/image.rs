//! Image extraction: raster decode followed by OCR.

use crate::error::{Result, SiftError};
use crate::ocr::OcrEngine;

/// Decode the attachment as a raster image, then run OCR over it.
///
/// Decode failures (a sniffed `image/*` payload that is not actually a
/// decodable image) are reported like any other per-attachment failure.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| SiftError::Extraction(format!("cannot decode image: {e}")))?;

    let engine = OcrEngine::shared()?;
    engine.recognize(&decoded)
}
