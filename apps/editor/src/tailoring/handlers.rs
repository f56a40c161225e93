//! Axum route handlers for tailoring the master resume to a job description.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend_client::types::TailoredFiles;
use crate::errors::AppError;
use crate::models::tailored::TailoredEntry;
use crate::session::SessionSnapshot;
use crate::state::AppState;
use crate::tailoring::{copy_all_text, filter, summary, ReviewSummary};

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub summary: ReviewSummary,
    pub session: SessionSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub changes_only: bool,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub job_description: String,
    pub items: Vec<TailoredEntry>,
    pub summary: ReviewSummary,
}

fn no_tailored_resume() -> AppError {
    AppError::NotFound("No tailored resume available".to_string())
}

/// POST /api/v1/tailor
///
/// Tailors the master resume and replaces the session's entries with the result.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(req): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    let job_description = req.job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let tailored = state.backend.tailor_master_resume(job_description).await?;
    let summary = summary(&tailored.resume_items);
    info!(
        "Tailored {} entries ({} changed)",
        summary.total, summary.changed
    );

    let mut session = state.session.lock().await;
    session.load_tailored(job_description, tailored.resume_items);
    Ok(Json(TailorResponse {
        summary,
        session: session.snapshot(),
    }))
}

/// GET /api/v1/tailor/review?changes_only=
pub async fn handle_review(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<ReviewResponse>, AppError> {
    let session = state.session.lock().await;
    let result = session.tailored().ok_or_else(no_tailored_resume)?;
    Ok(Json(ReviewResponse {
        job_description: result.job_description.clone(),
        items: filter(&result.items, query.changes_only)
            .into_iter()
            .cloned()
            .collect(),
        summary: summary(&result.items),
    }))
}

/// GET /api/v1/tailor/copy
///
/// All tailored entries as plain text.
pub async fn handle_copy_all(State(state): State<AppState>) -> Result<String, AppError> {
    let session = state.session.lock().await;
    let result = session.tailored().ok_or_else(no_tailored_resume)?;
    Ok(copy_all_text(&result.items))
}

/// GET /api/v1/tailor/files
pub async fn handle_tailored_files(
    State(state): State<AppState>,
) -> Result<Json<TailoredFiles>, AppError> {
    Ok(Json(state.backend.get_tailored_resumes().await?))
}
