//! Container decoding: format selection plus the EML and MSG decoders.

pub mod eml;
pub mod msg;

use crate::error::{Result, SiftError};
use crate::model::email::ParsedEmail;

/// Decode an uploaded container into a [`ParsedEmail`].
///
/// Format selection is by file-name suffix only (case-sensitive `.eml` or
/// `.msg`). This is a deliberate trust boundary: the *container* name comes
/// from the caller, while *attachment* names come from inside the payload
/// and are therefore sniffed by content instead (see [`crate::extract`]).
pub fn parse_container(file_name: &str, raw: &[u8]) -> Result<ParsedEmail> {
    if file_name.ends_with(".eml") {
        eml::parse_eml(raw)
    } else if file_name.ends_with(".msg") {
        msg::parse_msg(raw)
    } else {
        tracing::error!(file_name, "Unsupported container format");
        Err(SiftError::UnsupportedContainer(file_name.to_string()))
    }
}
