use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use crate::infrastructure::AppState;
use crate::services::scan_service::{self, SaveOutcome};

pub async fn get_session(State(state): State<AppState>) -> Json<Value> {
    let (phase, pending) = scan_service::session_view(&state).await;
    Json(json!({ "phase": phase, "pending": pending }))
}

pub async fn confirm(State(state): State<AppState>) -> impl IntoResponse {
    match scan_service::confirm_pending(&state).await {
        SaveOutcome::Saved(book) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Saved to your shelf", "book": book })),
        )
            .into_response(),
        SaveOutcome::Duplicate => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "already cataloged" })),
        )
            .into_response(),
        SaveOutcome::NothingPending => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No pending book to save" })),
        )
            .into_response(),
        SaveOutcome::Fault(reason) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": reason })),
        )
            .into_response(),
    }
}

pub async fn discard(State(state): State<AppState>) -> impl IntoResponse {
    let discarded = scan_service::discard_pending(&state).await;
    (StatusCode::OK, Json(json!({ "discarded": discarded })))
}
