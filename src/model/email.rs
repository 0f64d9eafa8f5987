//! The normalized result of decoding one email container.

use super::address::EmailAddress;
use super::attachment::AttachmentResource;
use crate::scratch::ScratchDir;

/// Envelope fields plus the ordered attachment list for one container.
///
/// Lives for the duration of one request: container decode → attachment
/// extraction → response assembly. The value owns the request's scratch
/// directory, so dropping it deletes every materialized attachment file
/// regardless of how the request ended.
#[derive(Debug)]
pub struct ParsedEmail {
    /// Originating address (first `From` address); non-empty on success.
    pub from: EmailAddress,
    /// Raw subject line; may be empty.
    pub subject: String,
    /// Concatenated plain-text content of all text-bearing parts; may be empty.
    pub body: String,
    /// Attachments in container discovery order.
    ///
    /// Order is significant: later stages correlate attachments to their
    /// extracted text by position.
    pub attachments: Vec<AttachmentResource>,
    /// Scratch storage backing `attachments`; freed on drop.
    #[allow(dead_code)]
    scratch: ScratchDir,
}

impl ParsedEmail {
    pub fn new(
        from: EmailAddress,
        subject: String,
        body: String,
        attachments: Vec<AttachmentResource>,
        scratch: ScratchDir,
    ) -> Self {
        Self {
            from,
            subject,
            body,
            attachments,
            scratch,
        }
    }
}
