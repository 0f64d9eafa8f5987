//! Decoder for `.msg` containers (Outlook compound-binary / OLE messages).

use msg_parser::Outlook;

use crate::error::{Result, SiftError};
use crate::model::address::EmailAddress;
use crate::model::attachment::AttachmentResource;
use crate::model::email::ParsedEmail;
use crate::scratch::ScratchDir;

/// Parse a `.msg` container into a [`ParsedEmail`].
///
/// The OLE decoder needs file-path access, so the upload is first
/// materialized into the request's scratch directory. Envelope fields come
/// from the message's display-from, subject, and plain-text body
/// properties; attachment chunks are written out in their stored order.
pub fn parse_msg(raw: &[u8]) -> Result<ParsedEmail> {
    let scratch = ScratchDir::new()?;
    let container_path = scratch.create_file("container.msg", raw)?;

    let outlook = Outlook::from_path(&container_path)
        .map_err(|e| SiftError::ContainerDecode(format!("invalid MSG container: {e}")))?;

    let from = EmailAddress::new(
        Some(outlook.sender.name.as_str()),
        outlook.sender.email.as_str(),
    );
    let subject = outlook.subject;
    let body = outlook.body;

    let mut attachments = Vec::with_capacity(outlook.attachments.len());
    for (idx, chunk) in outlook.attachments.iter().enumerate() {
        // Prefer the long file name, fall back to the display name.
        let name = if chunk.file_name.is_empty() {
            if chunk.display_name.is_empty() {
                format!("attachment_{idx}")
            } else {
                chunk.display_name.clone()
            }
        } else {
            chunk.file_name.clone()
        };

        let payload = decode_hex_payload(&chunk.payload).map_err(|e| {
            SiftError::ContainerDecode(format!("unreadable attachment chunk '{name}': {e}"))
        })?;
        let path = scratch.create_file(&name, &payload)?;
        attachments.push(AttachmentResource::new(name, path));
    }

    tracing::debug!(
        subject = %subject,
        attachments = attachments.len(),
        "Decoded MSG container"
    );

    Ok(ParsedEmail::new(from, subject, body, attachments, scratch))
}

/// Decode the hex string `msg_parser` uses for attachment payloads.
fn decode_hex_payload(hex: &str) -> std::result::Result<Vec<u8>, String> {
    let hex = hex.trim();
    if hex.len() % 2 != 0 {
        return Err(format!("odd-length hex payload ({} chars)", hex.len()));
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let digits = hex.as_bytes();
    for pair in digits.chunks_exact(2) {
        let hi = hex_val(pair[0]).ok_or_else(|| format!("invalid hex digit '{}'", pair[0] as char))?;
        let lo = hex_val(pair[1]).ok_or_else(|| format!("invalid hex digit '{}'", pair[1] as char))?;
        bytes.push((hi << 4) | lo);
    }
    Ok(bytes)
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_payload() {
        assert_eq!(
            decode_hex_payload("255044462d312e34").unwrap(),
            b"%PDF-1.4".to_vec()
        );
        assert_eq!(decode_hex_payload("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex_payload("FFff00").unwrap(), vec![0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_decode_hex_payload_rejects_garbage() {
        assert!(decode_hex_payload("abc").is_err());
        assert!(decode_hex_payload("zz").is_err());
    }

    #[test]
    fn test_malformed_container_is_fatal() {
        let err = parse_msg(b"this is not an OLE compound file").unwrap_err();
        assert!(matches!(err, SiftError::ContainerDecode(_)));
    }
}
