//! Axum route handler for the print preview.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::preview::{layout, PreviewSection};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub revision: u64,
    pub sections: Vec<PreviewSection>,
}

/// GET /api/v1/preview
pub async fn handle_preview(
    State(state): State<AppState>,
) -> Result<Json<PreviewResponse>, AppError> {
    let session = state.session.lock().await;
    if session.entries().is_empty() {
        return Err(AppError::NotFound("No resume loaded".to_string()));
    }
    Ok(Json(PreviewResponse {
        revision: session.revision(),
        sections: layout(session.entries().as_slice()),
    }))
}
