use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::services::scan_service::{self, ScanOutcome};

pub async fn scan_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        if field.name() == Some("file") {
            let data = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": e.to_string() })),
                    )
                        .into_response();
                }
            };

            let outcome = scan_service::process_image(&state, &data).await;
            return scan_outcome_response(outcome);
        }
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "No file uploaded" })),
    )
        .into_response()
}

/// Shared rendering for the image and manual-entry paths. Everything the
/// user can recover from locally stays a 200 with an outcome tag; only an
/// upstream fault turns into an error status.
pub(crate) fn scan_outcome_response(outcome: ScanOutcome) -> Response {
    match outcome {
        ScanOutcome::Pending(book) => (
            StatusCode::OK,
            Json(json!({ "outcome": "pending", "book": book })),
        )
            .into_response(),
        ScanOutcome::NoBarcode => (
            StatusCode::OK,
            Json(json!({
                "outcome": "no_barcode",
                "message": "No barcode found. Try a sharper picture."
            })),
        )
            .into_response(),
        ScanOutcome::NoMatch => (
            StatusCode::OK,
            Json(json!({
                "outcome": "no_match",
                "message": "No book found for that ISBN."
            })),
        )
            .into_response(),
        ScanOutcome::LookupDisabled => (
            StatusCode::OK,
            Json(json!({
                "outcome": "lookup_disabled",
                "message": "Naver API credentials are not configured."
            })),
        )
            .into_response(),
        ScanOutcome::Fault(reason) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "outcome": "fault", "error": reason })),
        )
            .into_response(),
    }
}
