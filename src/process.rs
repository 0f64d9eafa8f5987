//! Request pipeline: container decode → attachment extraction → report.

use crate::error::Result;
use crate::extract;
use crate::model::report::EmailReport;
use crate::parser;

/// Process one uploaded email container end to end.
///
/// A container-level failure (unrecognized suffix, malformed payload)
/// aborts the whole request. Per-attachment failures are already folded
/// into the outcome list by the dispatcher and appear in the report as
/// error sentences in place of the extracted text.
///
/// All scratch files materialized for the request are deleted before this
/// function returns, on success and on error.
pub fn process_email(file_name: &str, raw: &[u8]) -> Result<EmailReport> {
    let email = parser::parse_container(file_name, raw)?;
    let outcomes = extract::extract_all(&email.attachments);
    let report = EmailReport::assemble(&email, outcomes);
    // `email` drops here, releasing the scratch directory.
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;

    #[test]
    fn test_unsupported_suffix_rejects_whole_request() {
        let err = process_email("upload.txt", b"whatever").unwrap_err();
        assert!(matches!(err, SiftError::UnsupportedContainer(_)));
    }

    #[test]
    fn test_report_aligns_with_attachments() {
        let raw = "From: a@example.com\r\n\
            Subject: two files\r\n\
            Content-Type: multipart/mixed; boundary=\"Z\"\r\n\
            \r\n\
            --Z\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            body text\r\n\
            --Z\r\n\
            Content-Type: text/csv\r\n\
            Content-Disposition: attachment; filename=\"one.csv\"\r\n\
            \r\n\
            a,b\r\n\
            --Z\r\n\
            Content-Type: application/octet-stream\r\n\
            Content-Disposition: attachment; filename=\"two.bin\"\r\n\
            Content-Transfer-Encoding: base64\r\n\
            \r\n\
            AAECAwQF\r\n\
            --Z--\r\n";

        let report = process_email("mail.eml", raw.as_bytes()).unwrap();
        assert_eq!(report.attachments.len(), 2);
        assert_eq!(report.attachments[0].name, "one.csv");
        assert_eq!(report.attachments[1].name, "two.bin");
    }
}
