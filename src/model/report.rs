//! Response assembly: the serializable result handed to downstream stages.

use super::attachment::ExtractionOutcome;
use super::email::ParsedEmail;

/// Flattened, serializable result of one processed container.
///
/// This is the boundary where structured [`ExtractionOutcome`]s collapse
/// into plain strings: a failed attachment's "text" is the documented
/// error sentence, indistinguishable from a success except by wording.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EmailReport {
    /// Sender display string.
    pub from: String,
    /// Subject line (may be empty).
    pub subject: String,
    /// Plain-text body (may be empty).
    pub body: String,
    /// One entry per attachment, in container discovery order.
    pub attachments: Vec<AttachmentReport>,
}

/// Extracted text (or flattened failure string) for one attachment.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AttachmentReport {
    /// File name as declared in the container.
    pub name: String,
    /// Extracted text, or the per-attachment error sentence.
    pub text: String,
}

impl EmailReport {
    /// Assemble the report from a parsed email and its outcome list.
    ///
    /// `outcomes` must be order-aligned with `email.attachments`.
    pub fn assemble(email: &ParsedEmail, outcomes: Vec<ExtractionOutcome>) -> Self {
        debug_assert_eq!(email.attachments.len(), outcomes.len());

        let attachments = email
            .attachments
            .iter()
            .zip(outcomes)
            .map(|(resource, outcome)| AttachmentReport {
                name: resource.name.clone(),
                text: outcome.into_display_string(),
            })
            .collect();

        Self {
            from: email.from.display(),
            subject: email.subject.clone(),
            body: email.body.clone(),
            attachments,
        }
    }
}
