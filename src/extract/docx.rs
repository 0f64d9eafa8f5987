//! Word-processing (DOCX) extraction: paragraph text, one per line.

use std::path::Path;

use crate::error::{Result, SiftError};

/// Extract the document's paragraphs as plain text.
pub fn extract(path: &Path) -> Result<String> {
    docx_lite::extract_text(path)
        .map_err(|e| SiftError::Extraction(format!("cannot extract DOCX text: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_docx_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.docx");
        std::fs::write(&path, b"PK\x03\x04 not a real package").unwrap();
        assert!(extract(&path).is_err());
    }
}
