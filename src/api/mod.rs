pub mod books;
pub mod health;
pub mod lookup;
pub mod scan;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Scanning
        .route("/scan/image", post(scan::scan_image))
        // Manual entry
        .route("/lookup", post(lookup::lookup_isbn))
        // Result/confirmation panel
        .route("/session", get(session::get_session))
        .route("/session/confirm", post(session::confirm))
        .route("/session/discard", post(session::discard))
        // Catalog
        .route("/books", get(books::list_books))
        .with_state(state)
}
