use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let books = state
        .catalog
        .load_all()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(json!({
        "books": books,
        "total": books.len()
    })))
}
