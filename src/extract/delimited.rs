//! Delimited-text (CSV) extraction: a verbatim line pass-through.

use crate::error::{Result, SiftError};

/// Return the file's lines re-joined with `\n`.
///
/// No delimiter-aware parsing happens here: CSV content is already plain
/// text, and downstream classification wants it verbatim.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| SiftError::Extraction(format!("CSV is not valid UTF-8: {e}")))?;

    Ok(text.lines().collect::<Vec<_>>().join("\n"))
}
