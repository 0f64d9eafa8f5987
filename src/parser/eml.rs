//! Decoder for `.eml` containers (RFC 5322 message with a MIME part tree).

use mail_parser::{MessageParser, MimeHeaders, PartType};

use crate::error::{Result, SiftError};
use crate::model::address::EmailAddress;
use crate::model::attachment::AttachmentResource;
use crate::model::email::ParsedEmail;
use crate::scratch::ScratchDir;

/// Maximum depth for recursive multipart descent
/// (bounds stack use on adversarial nesting).
const MAX_DEPTH: usize = 10;

/// Parse a `.eml` container into a [`ParsedEmail`].
///
/// Envelope: first `From` address and the raw `Subject` value. Body: the
/// concatenated decoded text of every `text/*` part, walking nested
/// multiparts in declaration order. Attachments: every part with an
/// explicit `attachment` disposition or a non-empty declared file name,
/// materialized into the request's scratch directory in discovery order.
pub fn parse_eml(raw: &[u8]) -> Result<ParsedEmail> {
    let parsed = MessageParser::default()
        .parse(raw)
        .ok_or_else(|| SiftError::ContainerDecode("not a parseable MIME message".into()))?;

    let from = parsed
        .from()
        .and_then(|a| a.first())
        .map(|addr| EmailAddress::new(addr.name.as_deref(), addr.address.as_deref().unwrap_or("")))
        .filter(|a| !a.is_empty())
        .ok_or_else(|| SiftError::ContainerDecode("missing or malformed From header".into()))?;

    let subject = parsed.subject().unwrap_or("").to_string();

    let mut body = String::new();
    append_text_parts(&parsed, 0, 0, &mut body);

    let scratch = ScratchDir::new()?;
    let mut attachments = Vec::new();
    collect_attachments(&parsed, 0, 0, &scratch, &mut attachments)?;

    tracing::debug!(
        from = %from,
        attachments = attachments.len(),
        body_bytes = body.len(),
        "Decoded EML container"
    );

    Ok(ParsedEmail::new(from, subject, body, attachments, scratch))
}

/// Append the decoded text of every `text/*` part under `part_id`.
///
/// Multiparts recurse in declaration order; non-text leaves contribute
/// nothing (they are attachment candidates instead).
fn append_text_parts(msg: &mail_parser::Message<'_>, part_id: usize, depth: usize, out: &mut String) {
    if depth > MAX_DEPTH {
        tracing::warn!(part_id, "Multipart nesting too deep, stopping body walk");
        return;
    }
    let Some(part) = msg.parts.get(part_id) else {
        return;
    };

    match &part.body {
        PartType::Text(text) => out.push_str(text),
        PartType::Html(html) => out.push_str(html),
        PartType::Multipart(children) => {
            for &child in children {
                append_text_parts(msg, child, depth + 1, out);
            }
        }
        _ => {}
    }
}

/// Materialize every attachment part under `part_id` in discovery order.
///
/// A part is an attachment when its disposition is explicitly
/// `attachment`, or when it declares a non-empty file name regardless of
/// disposition.
fn collect_attachments(
    msg: &mail_parser::Message<'_>,
    part_id: usize,
    depth: usize,
    scratch: &ScratchDir,
    out: &mut Vec<AttachmentResource>,
) -> Result<()> {
    if depth > MAX_DEPTH {
        tracing::warn!(part_id, "Multipart nesting too deep, stopping attachment walk");
        return Ok(());
    }
    let Some(part) = msg.parts.get(part_id) else {
        return Ok(());
    };

    if let PartType::Multipart(children) = &part.body {
        for &child in children {
            collect_attachments(msg, child, depth + 1, scratch, out)?;
        }
        return Ok(());
    }

    let declared_name = part.attachment_name().unwrap_or("");
    let is_attachment_disposition = part
        .content_disposition()
        .map(|d| d.ctype().eq_ignore_ascii_case("attachment"))
        .unwrap_or(false);

    if is_attachment_disposition || !declared_name.is_empty() {
        let name = if declared_name.is_empty() {
            format!("attachment_{}", out.len())
        } else {
            declared_name.to_string()
        };
        let path = scratch.create_file(&name, part.contents())?;
        out.push(AttachmentResource::new(name, path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "From: Alice Example <alice@example.com>\r\n\
        To: bob@example.com\r\n\
        Subject: Greetings\r\n\
        Content-Type: text/plain\r\n\
        \r\n\
        Hello Bob\r\n";

    #[test]
    fn test_parse_simple_message() {
        let email = parse_eml(SIMPLE.as_bytes()).unwrap();
        assert_eq!(email.from.display(), "Alice Example <alice@example.com>");
        assert_eq!(email.subject, "Greetings");
        assert!(email.body.contains("Hello Bob"));
        assert!(email.attachments.is_empty());
    }

    #[test]
    fn test_missing_from_is_fatal() {
        let raw = b"Subject: no sender\r\n\r\nbody\r\n";
        let err = parse_eml(raw).unwrap_err();
        assert!(matches!(err, SiftError::ContainerDecode(_)));
    }

    #[test]
    fn test_missing_subject_is_empty_not_error() {
        let raw = b"From: a@b.com\r\n\r\nbody\r\n";
        let email = parse_eml(raw).unwrap();
        assert_eq!(email.subject, "");
    }

    #[test]
    fn test_multipart_body_and_attachment() {
        let raw = "From: sender@example.com\r\n\
            Subject: With attachment\r\n\
            MIME-Version: 1.0\r\n\
            Content-Type: multipart/mixed; boundary=\"XYZ\"\r\n\
            \r\n\
            --XYZ\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            See the attached report.\r\n\
            --XYZ\r\n\
            Content-Type: application/pdf; name=\"report.pdf\"\r\n\
            Content-Disposition: attachment; filename=\"report.pdf\"\r\n\
            Content-Transfer-Encoding: base64\r\n\
            \r\n\
            JVBERi0xLjQK\r\n\
            --XYZ--\r\n";

        let email = parse_eml(raw.as_bytes()).unwrap();
        assert!(email.body.contains("See the attached report."));
        assert_eq!(email.attachments.len(), 1);
        assert_eq!(email.attachments[0].name, "report.pdf");
        // Base64 payload decoded before materialization
        assert_eq!(email.attachments[0].read().unwrap(), b"%PDF-1.4\n");
    }

    #[test]
    fn test_scratch_files_deleted_on_drop() {
        let raw = "From: sender@example.com\r\n\
            Content-Type: multipart/mixed; boundary=\"B\"\r\n\
            \r\n\
            --B\r\n\
            Content-Type: text/csv\r\n\
            Content-Disposition: attachment; filename=\"data.csv\"\r\n\
            \r\n\
            a,b\r\n\
            --B--\r\n";
        let email = parse_eml(raw.as_bytes()).unwrap();
        let path = email.attachments[0].path.clone();
        assert!(path.exists());
        drop(email);
        assert!(!path.exists());
    }
}
