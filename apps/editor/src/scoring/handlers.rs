use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::backend_client::types::{ScoreResult, ScoreTicket};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub s3_key: String,
    pub job_description: String,
    #[serde(default)]
    pub with_auth: bool,
}

/// POST /api/v1/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreTicket>, AppError> {
    if req.s3_key.trim().is_empty() {
        return Err(AppError::Validation("s3_key cannot be empty".to_string()));
    }
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let ticket = state
        .backend
        .score_resume(&req.s3_key, &req.job_description, req.with_auth)
        .await?;
    tracing::info!("Scoring requested: result {}", ticket.result_id);
    Ok(Json(ticket))
}

/// GET /api/v1/score/:result_id
pub async fn handle_get_score(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Result<Json<ScoreResult>, AppError> {
    Ok(Json(state.backend.get_score(&result_id).await?))
}
