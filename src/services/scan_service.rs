//! Scan Service - Pure business logic without HTTP layer
//!
//! Orchestrates one user-triggered event start-to-finish: decode, look up,
//! park as pending, and persist on confirmation. The session mutex is held
//! for the whole event, which also serializes the existence-check-then-insert
//! sequence against the catalog.

use crate::domain::InsertOutcome;
use crate::infrastructure::AppState;
use crate::models::Book;
use crate::session::{Phase, ScanSession};

/// Outcome of a decode/lookup cycle.
#[derive(Debug, PartialEq)]
pub enum ScanOutcome {
    /// Record found and parked for confirmation.
    Pending(Book),
    /// Decoder produced no payload; retry with a new capture.
    NoBarcode,
    /// Lookup returned zero results for the ISBN.
    NoMatch,
    /// Credentials missing; no request was attempted.
    LookupDisabled,
    /// Decoder or search endpoint infrastructure fault.
    Fault(String),
}

/// Outcome of a confirmation.
#[derive(Debug, PartialEq)]
pub enum SaveOutcome {
    Saved(Book),
    /// Rejected: the ISBN is already cataloged. Pending record retained.
    Duplicate,
    NothingPending,
    /// Unexpected store fault. Pending record retained.
    Fault(String),
}

/// Handle an uploaded or captured image: decode, then look up.
pub async fn process_image(state: &AppState, image_data: &[u8]) -> ScanOutcome {
    let mut session = state.session.lock().await;
    session.begin_decoding();

    let payloads = match state.decoder.decode(image_data) {
        Ok(payloads) => payloads,
        Err(e) => {
            tracing::warn!("barcode decoding failed: {}", e);
            session.settle();
            return ScanOutcome::Fault(e.to_string());
        }
    };

    // First payload with non-empty text, or none.
    let Some(payload) = payloads.into_iter().find(|p| !p.is_empty()) else {
        session.settle();
        return ScanOutcome::NoBarcode;
    };

    tracing::info!(payload = %payload, "barcode decoded");
    lookup_and_hold(state, &mut session, &payload).await
}

/// Handle a manually typed ISBN with an explicit submit: skip decoding.
pub async fn process_manual(state: &AppState, input: &str) -> ScanOutcome {
    let mut session = state.session.lock().await;
    lookup_and_hold(state, &mut session, input).await
}

async fn lookup_and_hold(
    state: &AppState,
    session: &mut ScanSession,
    query: &str,
) -> ScanOutcome {
    let Some(client) = state.lookup.as_ref() else {
        session.settle();
        return ScanOutcome::LookupDisabled;
    };

    session.begin_lookup();
    match client.search_isbn(query).await {
        Ok(Some(book)) => {
            session.hold(book.clone());
            ScanOutcome::Pending(book)
        }
        Ok(None) => {
            session.settle();
            ScanOutcome::NoMatch
        }
        Err(e) => {
            tracing::warn!("lookup failed: {}", e);
            session.settle();
            ScanOutcome::Fault(e.to_string())
        }
    }
}

/// Persist the pending record. Duplicates and write faults keep it parked so
/// the user can retry or abandon.
pub async fn confirm_pending(state: &AppState) -> SaveOutcome {
    let mut session = state.session.lock().await;
    let Some(book) = session.pending().cloned() else {
        return SaveOutcome::NothingPending;
    };

    match state.catalog.insert(&book).await {
        Ok(InsertOutcome::Accepted) => {
            session.clear();
            tracing::info!(isbn = %book.isbn, "book cataloged");
            SaveOutcome::Saved(book)
        }
        Ok(InsertOutcome::Duplicate) => SaveOutcome::Duplicate,
        Err(e) => {
            tracing::error!("catalog write failed: {}", e);
            SaveOutcome::Fault(e.to_string())
        }
    }
}

/// Drop the pending record. Returns whether there was one.
pub async fn discard_pending(state: &AppState) -> bool {
    state.session.lock().await.clear().is_some()
}

/// Snapshot of the session for the result/confirmation panel.
pub async fn session_view(state: &AppState) -> (Phase, Option<Book>) {
    let session = state.session.lock().await;
    (session.phase(), session.pending().cloned())
}
