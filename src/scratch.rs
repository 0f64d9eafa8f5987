//! Scratch storage for attachment payloads materialized during container decode.
//!
//! Every request gets its own directory under the system temp dir. The
//! directory (and every file written into it) is removed when the
//! [`ScratchDir`] is dropped, on success and error paths alike.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, SiftError};

/// A per-request scratch directory.
///
/// Owned by the [`ParsedEmail`](crate::model::email::ParsedEmail) produced
/// from one container so that the attachment files live exactly as long as
/// the request, and never longer.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a fresh scratch directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::with_prefix("mailsift-")
            .map_err(|e| SiftError::io(std::env::temp_dir(), e))?;
        tracing::debug!(path = %dir.path().display(), "Created scratch directory");
        Ok(Self { dir })
    }

    /// Path of the scratch directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `bytes` to a new scratch file named after `name_hint`.
    ///
    /// The hint is sanitized for filesystem use; collisions get a numeric
    /// suffix so two attachments with the same declared name never clobber
    /// each other.
    pub fn create_file(&self, name_hint: &str, bytes: &[u8]) -> Result<PathBuf> {
        let filename = sanitize_filename(name_hint, 150);
        let path = unique_path(&self.dir.path().join(&filename));
        std::fs::write(&path, bytes).map_err(|e| SiftError::io(&path, e))?;
        Ok(path)
    }
}

/// Sanitize a string for use as a filename.
///
/// Replaces invalid characters with `_` and truncates to `max_len`.
pub fn sanitize_filename(s: &str, max_len: usize) -> String {
    let sanitized: String = s
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '@' {
                c
            } else {
                '_'
            }
        })
        .take(max_len)
        .collect();

    if sanitized.is_empty() {
        "attachment".to_string()
    } else {
        sanitized
    }
}

/// If `path` already exists, append a counter to make it unique.
fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    for i in 1..1000 {
        let candidate = if ext.is_empty() {
            parent.join(format!("{stem}_{i}"))
        } else {
            parent.join(format!("{stem}_{i}.{ext}"))
        };
        if !candidate.exists() {
            return candidate;
        }
    }

    parent.join(format!("{stem}_dup.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_cleanup() {
        let scratch = ScratchDir::new().unwrap();
        let path = scratch.create_file("report.pdf", b"%PDF-").unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-");

        drop(scratch);
        assert!(!path.exists(), "scratch file should be deleted on drop");
    }

    #[test]
    fn test_duplicate_names_get_unique_paths() {
        let scratch = ScratchDir::new().unwrap();
        let a = scratch.create_file("data.csv", b"1").unwrap();
        let b = scratch.create_file("data.csv", b"2").unwrap();
        assert_ne!(a, b);
        assert_eq!(std::fs::read(&a).unwrap(), b"1");
        assert_eq!(std::fs::read(&b).unwrap(), b"2");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("my report (1).pdf", 150), "my_report__1_.pdf");
        assert_eq!(sanitize_filename("", 150), "attachment");
        assert_eq!(sanitize_filename("../../etc/passwd", 150), ".._.._etc_passwd");
    }
}
