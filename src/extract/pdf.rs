//! PDF text extraction.

use std::path::Path;

use crate::error::{Result, SiftError};

/// Extract the reading-order text of the whole document as one string.
pub fn extract(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .map_err(|e| SiftError::Extraction(format!("cannot extract PDF text: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.pdf");
        std::fs::write(&path, b"%PDF-1.4 but nothing else").unwrap();
        assert!(extract(&path).is_err());
    }
}
