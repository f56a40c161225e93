//! Axum route handlers for moving resume files to and from the backend.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend_client::types::StoredFileResponse;
use crate::backend_client::upload::{
    encode_file, pdf_filename, pdf_payload_from_data_uri, validate_resume_file,
};
use crate::errors::AppError;
use crate::session::SessionSnapshot;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MasterResponse {
    pub s3_key: Option<String>,
    pub session: SessionSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct GuestUploadQuery {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct SavePdfRequest {
    /// `data:application/pdf;...;base64,<payload>` as produced by the renderer.
    pub data_uri: String,
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavePdfResponse {
    pub s3_key: String,
    pub filename: String,
}

fn content_type(headers: &HeaderMap) -> &str {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn reload_master(state: &AppState, s3_key: Option<String>) -> Result<MasterResponse, AppError> {
    let master = state.backend.get_master_resume().await?;
    info!("Loaded master resume with {} entries", master.entries.len());

    let mut session = state.session.lock().await;
    session.load_master(Some(master.url), master.entries);
    Ok(MasterResponse {
        s3_key,
        session: session.snapshot(),
    })
}

/// POST /api/v1/master
///
/// Raw file body; the `Content-Type` header must be PDF, DOCX or plain text.
/// Uploads it as the master resume, then reloads the extracted entries.
pub async fn handle_upload_master(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MasterResponse>, AppError> {
    validate_resume_file(content_type(&headers), &body)?;

    let stored = state
        .backend
        .process_master_resume(&encode_file(&body))
        .await?;
    info!("Master resume stored at {}", stored.s3_key);

    Ok(Json(reload_master(&state, Some(stored.s3_key)).await?))
}

/// POST /api/v1/master/reload
pub async fn handle_reload_master(
    State(state): State<AppState>,
) -> Result<Json<MasterResponse>, AppError> {
    Ok(Json(reload_master(&state, None).await?))
}

/// POST /api/v1/upload-guest?filename=
///
/// Stores a resume without an account, so it can be scored.
pub async fn handle_upload_guest(
    State(state): State<AppState>,
    Query(query): Query<GuestUploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<StoredFileResponse>, AppError> {
    let filename = query.filename.trim();
    if filename.is_empty() {
        return Err(AppError::Validation("filename cannot be empty".to_string()));
    }
    validate_resume_file(content_type(&headers), &body)?;
    let stored = state
        .backend
        .upload_resume_guest(&encode_file(&body), filename)
        .await?;
    info!("Guest resume stored at {}", stored.s3_key);
    Ok(Json(stored))
}

/// POST /api/v1/pdf
///
/// Saves an already rendered resume PDF to the user's files.
pub async fn handle_save_pdf(
    State(state): State<AppState>,
    Json(req): Json<SavePdfRequest>,
) -> Result<Json<SavePdfResponse>, AppError> {
    let payload = pdf_payload_from_data_uri(&req.data_uri)?;
    let filename = pdf_filename(req.filename.as_deref());

    let stored = state.backend.upload_resume(payload, &filename).await?;
    info!("Saved {filename} to {}", stored.s3_key);

    Ok(Json(SavePdfResponse {
        s3_key: stored.s3_key,
        filename,
    }))
}
