//! Client-side upload validation.
//!
//! Runs before any network call; a rejected file never reaches the wire.

use crate::error::{DocflowError, Result};

/// File extensions the ingestion pipeline accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".txt", ".csv", ".xlsx"];

/// Maximum upload size: 16 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Validates a candidate upload against the extension allow-list and the
/// size bound.
///
/// # Errors
///
/// Returns `Validation` errors, surfaced synchronously to the caller.
pub fn validate_upload(filename: &str, size_bytes: u64) -> Result<()> {
    let lowered = filename.to_lowercase();
    if !ALLOWED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        return Err(DocflowError::validation(
            "Unsupported file type. Please upload PDF, DOCX, TXT, CSV, or XLSX files.",
        ));
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(DocflowError::validation(
            "File too large. Maximum size is 16MB.",
        ));
    }

    Ok(())
}
