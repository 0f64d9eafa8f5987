//! Content-type sniffing for attachment payloads.
//!
//! Attachment file names are attacker-influenced and frequently wrong or
//! absent, so routing is decided from the bytes alone: magic-byte
//! detection via the `infer` crate, a ZIP entry probe to tell OOXML
//! documents from plain archives, and a text heuristic for everything
//! without a signature.

/// MIME type of an OOXML spreadsheet (`.xlsx`).
pub const MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// MIME type of a legacy binary spreadsheet (`.xls`).
pub const MIME_XLS: &str = "application/vnd.ms-excel";
/// MIME type of an OOXML word-processing document (`.docx`).
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// How many leading bytes the text heuristics look at.
const SAMPLE_LEN: usize = 8192;

/// Determine a MIME type from an attachment's bytes.
///
/// Never fails: bytes that match nothing are reported as
/// `application/octet-stream`.
pub fn sniff_mime(bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        let mime = kind.mime_type();
        // OOXML files without a specific matcher surface as bare ZIP;
        // probe the entry names to tell documents from plain archives.
        if mime == "application/zip" {
            return sniff_ooxml(bytes).unwrap_or(mime).to_string();
        }
        return mime.to_string();
    }

    // No magic bytes matched. Decide between text flavors and opaque binary.
    if is_likely_text(bytes) {
        let sample = String::from_utf8_lossy(&bytes[..bytes.len().min(SAMPLE_LEN)]);
        if looks_like_csv(&sample) {
            return "text/csv".to_string();
        }
        return "text/plain".to_string();
    }

    "application/octet-stream".to_string()
}

/// Probe a ZIP payload for OOXML package entry names.
fn sniff_ooxml(bytes: &[u8]) -> Option<&'static str> {
    if contains(bytes, b"xl/workbook.xml") || contains(bytes, b"xl/_rels/") {
        Some(MIME_XLSX)
    } else if contains(bytes, b"word/document.xml") || contains(bytes, b"word/_rels/") {
        Some(MIME_DOCX)
    } else {
        None
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Heuristic: does this buffer look like text?
///
/// Rejects buffers containing NUL bytes or a high proportion of
/// non-whitespace control characters in the sample window.
fn is_likely_text(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return true;
    }
    let sample = &bytes[..bytes.len().min(SAMPLE_LEN)];
    if sample.contains(&0) {
        return false;
    }

    let control = sample
        .iter()
        .filter(|&&b| b < 0x20 && b != b'\n' && b != b'\r' && b != b'\t')
        .count();
    control * 20 < sample.len()
}

/// Heuristic: text whose non-empty lines all carry the same positive
/// number of commas is reported as `text/csv`.
fn looks_like_csv(sample: &str) -> bool {
    let mut counts = sample
        .lines()
        .take(20)
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.matches(',').count());

    let Some(first) = counts.next() else {
        return false;
    };
    first > 0 && counts.all(|c| c == first)
}
