//! Generic fallback extraction: best-effort bytes-to-text conversion.

use chardetng::EncodingDetector;

use crate::error::Result;

/// Decode arbitrary bytes to text.
///
/// Detects the character encoding with `chardetng` and decodes with
/// `encoding_rs`; undecodable sequences become replacement characters.
/// This never fails — unknown binary simply yields low-quality text,
/// which downstream classification treats as noise.
pub fn extract(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    // Fast path: valid UTF-8 needs no detection.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(bytes);
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        assert_eq!(extract("héllo".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn test_latin1_is_decoded() {
        // "café" in ISO-8859-1
        let latin1 = [b'c', b'a', b'f', 0xE9];
        let text = extract(&latin1).unwrap();
        assert!(text.starts_with("caf"));
        assert_eq!(text.chars().count(), 4);
    }

    #[test]
    fn test_empty() {
        assert_eq!(extract(b"").unwrap(), "");
    }
}
