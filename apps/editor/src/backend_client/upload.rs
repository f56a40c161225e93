//! Preparing files for the backend: type checks, base64 encoding and
//! unwrapping rendered PDFs.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

pub const PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT: &str = "text/plain";

const ACCEPTED_RESUME_TYPES: [&str; 3] = [PDF, DOCX, PLAIN_TEXT];
const PDF_DATA_URI_PREFIX: &str = "data:application/pdf;";
const BASE64_MARKER: &str = "base64,";
pub const DEFAULT_PDF_FILENAME: &str = "resume.pdf";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a PDF, DOCX, or TXT file.")]
    UnsupportedType(String),

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Invalid PDF data URI format")]
    InvalidPdfDataUri,
}

/// Checks a resume upload's content type (parameters such as `charset` are
/// ignored) and that it carries bytes.
pub fn validate_resume_file(content_type: &str, bytes: &[u8]) -> Result<(), UploadError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if !ACCEPTED_RESUME_TYPES.contains(&mime.as_str()) {
        return Err(UploadError::UnsupportedType(content_type.to_string()));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    Ok(())
}

pub fn encode_file(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Extracts the base64 payload from a rendered `data:application/pdf;...` URI.
pub fn pdf_payload_from_data_uri(uri: &str) -> Result<&str, UploadError> {
    if !uri.starts_with(PDF_DATA_URI_PREFIX) {
        return Err(UploadError::InvalidPdfDataUri);
    }
    let start = uri
        .find(BASE64_MARKER)
        .ok_or(UploadError::InvalidPdfDataUri)?;
    let payload = &uri[start + BASE64_MARKER.len()..];
    if payload.is_empty() {
        return Err(UploadError::InvalidPdfDataUri);
    }
    Ok(payload)
}

pub fn pdf_filename(requested: Option<&str>) -> String {
    match requested.map(str::trim).filter(|name| !name.is_empty()) {
        None => DEFAULT_PDF_FILENAME.to_string(),
        Some(name) if name.to_ascii_lowercase().ends_with(".pdf") => name.to_string(),
        Some(name) => format!("{name}.pdf"),
    }
}
