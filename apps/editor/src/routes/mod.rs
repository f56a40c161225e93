pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::preview::handlers as preview;
use crate::scoring::handlers as scoring;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;
use crate::uploads::handlers as uploads;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editing session
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/entries", post(session::handle_add_entry))
        .route("/api/v1/entries/move", post(session::handle_move_entry))
        .route(
            "/api/v1/entries/:index",
            put(session::handle_update_entry).delete(session::handle_remove_entry),
        )
        .route(
            "/api/v1/entries/:index/shift",
            post(session::handle_shift_entry),
        )
        .route("/api/v1/drag", post(session::handle_drag))
        .route("/api/v1/preview", get(preview::handle_preview))
        // Master resume and files
        .route("/api/v1/master", post(uploads::handle_upload_master))
        .route("/api/v1/master/reload", post(uploads::handle_reload_master))
        .route("/api/v1/upload-guest", post(uploads::handle_upload_guest))
        .route("/api/v1/pdf", post(uploads::handle_save_pdf))
        // Tailoring
        .route("/api/v1/tailor", post(tailoring::handle_tailor))
        .route("/api/v1/tailor/review", get(tailoring::handle_review))
        .route("/api/v1/tailor/copy", get(tailoring::handle_copy_all))
        .route("/api/v1/tailor/files", get(tailoring::handle_tailored_files))
        // Scoring
        .route("/api/v1/score", post(scoring::handle_score))
        .route("/api/v1/score/:result_id", get(scoring::handle_get_score))
        .with_state(state)
}
