use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use crate::api::scan::scan_outcome_response;
use crate::infrastructure::AppState;
use crate::services::scan_service;

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub isbn: String,
}

pub async fn lookup_isbn(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> impl IntoResponse {
    let outcome = scan_service::process_manual(&state, &request.isbn).await;
    scan_outcome_response(outcome)
}
