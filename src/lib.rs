//! `mailsift` — normalized text extraction from email containers.
//!
//! This crate parses a single `.eml` (MIME) or `.msg` (Outlook
//! compound-binary) container into its envelope (from, subject, body) and
//! an ordered attachment list, then extracts best-effort plain text from
//! every attachment — spreadsheets, CSV, PDF, DOCX, images via OCR, and a
//! generic fallback — with per-attachment failure isolation.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod ocr;
pub mod parser;
pub mod process;
pub mod scratch;

pub use error::{Result, SiftError};
pub use model::report::EmailReport;
pub use process::process_email;
