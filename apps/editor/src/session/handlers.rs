//! Axum route handlers for editing the session's entry sequence.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::entry::Entry;
use crate::reconciler::drag::DragEvent;
use crate::reconciler::{EditCommand, Outcome, ShiftDirection};
use crate::session::{DragOutcome, SessionSnapshot};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Deserialize)]
pub struct ShiftRequest {
    pub direction: ShiftDirection,
}

#[derive(Debug, Serialize)]
pub struct EditResponse {
    pub outcome: Outcome,
    pub session: SessionSnapshot,
}

#[derive(Debug, Serialize)]
pub struct DragResponse {
    #[serde(flatten)]
    pub drag: DragOutcome,
    pub session: SessionSnapshot,
}

async fn apply(state: &AppState, command: EditCommand) -> Result<EditResponse, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.apply(command);
    if outcome == Outcome::OutOfBounds {
        return Err(AppError::NotFound(format!(
            "No entry at that position (sequence has {} entries)",
            session.entries().len()
        )));
    }
    Ok(EditResponse {
        outcome,
        session: session.snapshot(),
    })
}

fn parse_new_entry(body: &[u8]) -> Result<Entry, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Entry::placeholder());
    }
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("Invalid entry: {e}")))
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

/// POST /api/v1/entries
///
/// Appends the posted entry, or the default "New Entry" when the body is empty.
pub async fn handle_add_entry(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EditResponse>, AppError> {
    let entry = parse_new_entry(&body)?;
    let response = apply(&state, EditCommand::Add { entry }).await?;
    info!("Added entry, sequence now {}", response.session.entries.len());
    Ok(Json(response))
}

/// PUT /api/v1/entries/:index
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(entry): Json<Entry>,
) -> Result<Json<EditResponse>, AppError> {
    Ok(Json(apply(&state, EditCommand::Update { index, entry }).await?))
}

/// DELETE /api/v1/entries/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<EditResponse>, AppError> {
    let response = apply(&state, EditCommand::Remove { index }).await?;
    info!("Removed entry {index}");
    Ok(Json(response))
}

/// POST /api/v1/entries/move
pub async fn handle_move_entry(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let command = EditCommand::Move {
        source: req.source,
        target: req.target,
    };
    Ok(Json(apply(&state, command).await?))
}

/// POST /api/v1/entries/:index/shift
pub async fn handle_shift_entry(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<ShiftRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let command = EditCommand::Shift {
        index,
        direction: req.direction,
    };
    Ok(Json(apply(&state, command).await?))
}

/// POST /api/v1/drag
///
/// Accepts one resolved drag event, e.g. `{"event": "hover", "index": 2}`.
pub async fn handle_drag(
    State(state): State<AppState>,
    Json(event): Json<DragEvent>,
) -> Json<DragResponse> {
    let mut session = state.session.lock().await;
    let drag = session.drag(event);
    Json(DragResponse {
        drag,
        session: session.snapshot(),
    })
}
