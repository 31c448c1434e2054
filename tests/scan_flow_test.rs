use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelfscan::db;
use shelfscan::domain::{BarcodeDecoder, DomainError};
use shelfscan::infrastructure::AppState;
use shelfscan::models::Book;
use shelfscan::naver::{NaverClient, NaverCredentials};
use shelfscan::services::scan_service::{self, SaveOutcome, ScanOutcome};
use shelfscan::session::Phase;

// Decoder stub returning a fixed payload list
struct FixedDecoder(Vec<String>);

impl BarcodeDecoder for FixedDecoder {
    fn decode(&self, _image_data: &[u8]) -> Result<Vec<String>, DomainError> {
        Ok(self.0.clone())
    }
}

// Decoder stub simulating an infrastructure fault
struct BrokenDecoder;

impl BarcodeDecoder for BrokenDecoder {
    fn decode(&self, _image_data: &[u8]) -> Result<Vec<String>, DomainError> {
        Err(DomainError::External("decoder unavailable".to_string()))
    }
}

fn test_credentials() -> NaverCredentials {
    NaverCredentials {
        client_id: "test-id".to_string(),
        client_secret: "test-secret".to_string(),
    }
}

async fn setup_state(lookup: Option<NaverClient>) -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db, lookup)
}

fn mock_client(mock_server: &MockServer) -> NaverClient {
    NaverClient::with_endpoint(
        test_credentials(),
        format!("{}/v1/search/book.json", mock_server.uri()),
    )
    .expect("Failed to build client")
}

async fn mount_book(mock_server: &MockServer, isbn: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/search/book.json"))
        .and(query_param("query", isbn))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "items": [{
                "title": title,
                "author": "Han Kang",
                "publisher": "Changbi",
                "image": format!("https://bookthumb-phinf.pstatic.net/cover/{}.jpg", isbn)
            }]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn scanned_book_lands_in_catalog_after_confirmation() {
    let mock_server = MockServer::start().await;
    mount_book(&mock_server, "9788932473901", "The Vegetarian").await;

    let state = setup_state(Some(mock_client(&mock_server)))
        .await
        .with_decoder(Arc::new(FixedDecoder(vec!["9788932473901".to_string()])));

    let outcome = scan_service::process_image(&state, b"camera frame").await;
    let ScanOutcome::Pending(book) = outcome else {
        panic!("expected pending, got {:?}", outcome);
    };
    assert_eq!(book.isbn, "9788932473901");
    assert_eq!(book.title, "The Vegetarian");

    let saved = scan_service::confirm_pending(&state).await;
    assert!(matches!(saved, SaveOutcome::Saved(_)));

    let books = state.catalog.load_all().await.expect("load_all failed");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, "9788932473901");

    // Slot cleared, back to idle
    let (phase, pending) = scan_service::session_view(&state).await;
    assert_eq!(phase, Phase::Idle);
    assert!(pending.is_none());
}

#[tokio::test]
async fn duplicate_manual_entry_is_rejected_and_pending_retained() {
    let mock_server = MockServer::start().await;
    mount_book(&mock_server, "9788936434120", "Human Acts").await;

    let state = setup_state(Some(mock_client(&mock_server))).await;

    // Already on the shelf
    let existing = Book {
        isbn: "9788936434120".to_string(),
        title: "Human Acts".to_string(),
        authors: "Han Kang".to_string(),
        publisher: "Changbi".to_string(),
        thumbnail: String::new(),
    };
    state.catalog.insert(&existing).await.expect("seed insert");

    let outcome = scan_service::process_manual(&state, "978-89-364-3412-0").await;
    assert!(matches!(outcome, ScanOutcome::Pending(_)));

    let saved = scan_service::confirm_pending(&state).await;
    assert_eq!(saved, SaveOutcome::Duplicate);

    // Catalog unchanged, pending still parked for the user to decide
    let books = state.catalog.load_all().await.expect("load_all failed");
    assert_eq!(books.len(), 1);

    let (phase, pending) = scan_service::session_view(&state).await;
    assert_eq!(phase, Phase::Pending);
    assert!(pending.is_some());
}

#[tokio::test]
async fn blank_image_returns_idle_with_empty_slot() {
    let state = setup_state(None)
        .await
        .with_decoder(Arc::new(FixedDecoder(Vec::new())));

    let outcome = scan_service::process_image(&state, b"blank capture").await;
    assert_eq!(outcome, ScanOutcome::NoBarcode);

    let (phase, pending) = scan_service::session_view(&state).await;
    assert_eq!(phase, Phase::Idle);
    assert!(pending.is_none());
}

#[tokio::test]
async fn manual_entry_without_credentials_is_disabled() {
    let state = setup_state(None).await;

    let outcome = scan_service::process_manual(&state, "9788932473901").await;
    assert_eq!(outcome, ScanOutcome::LookupDisabled);
}

#[tokio::test]
async fn unknown_isbn_is_no_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/book.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "items": [] })),
        )
        .mount(&mock_server)
        .await;

    let state = setup_state(Some(mock_client(&mock_server))).await;

    let outcome = scan_service::process_manual(&state, "9780000000000").await;
    assert_eq!(outcome, ScanOutcome::NoMatch);

    let (phase, _) = scan_service::session_view(&state).await;
    assert_eq!(phase, Phase::Idle);
}

#[tokio::test]
async fn new_lookup_replaces_pending_record() {
    let mock_server = MockServer::start().await;
    mount_book(&mock_server, "9788932473901", "The Vegetarian").await;
    mount_book(&mock_server, "9788936434120", "Human Acts").await;

    let state = setup_state(Some(mock_client(&mock_server))).await;

    scan_service::process_manual(&state, "9788932473901").await;
    scan_service::process_manual(&state, "9788936434120").await;

    let (_, pending) = scan_service::session_view(&state).await;
    assert_eq!(pending.expect("pending record").isbn, "9788936434120");
}

#[tokio::test]
async fn empty_payloads_are_skipped() {
    let mock_server = MockServer::start().await;
    mount_book(&mock_server, "9788932473901", "The Vegetarian").await;

    let state = setup_state(Some(mock_client(&mock_server)))
        .await
        .with_decoder(Arc::new(FixedDecoder(vec![
            String::new(),
            "9788932473901".to_string(),
        ])));

    let outcome = scan_service::process_image(&state, b"frame").await;
    assert!(matches!(outcome, ScanOutcome::Pending(_)));
}

#[tokio::test]
async fn decoder_fault_is_reported_not_swallowed() {
    let state = setup_state(None).await.with_decoder(Arc::new(BrokenDecoder));

    let outcome = scan_service::process_image(&state, b"frame").await;
    assert!(matches!(outcome, ScanOutcome::Fault(_)));

    let (phase, pending) = scan_service::session_view(&state).await;
    assert_eq!(phase, Phase::Idle);
    assert!(pending.is_none());
}

#[tokio::test]
async fn confirm_without_pending_is_a_noop() {
    let state = setup_state(None).await;

    assert_eq!(
        scan_service::confirm_pending(&state).await,
        SaveOutcome::NothingPending
    );
    assert!(!scan_service::discard_pending(&state).await);
}
