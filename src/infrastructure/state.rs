//! Application state containing repositories and shared resources

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::domain::{BarcodeDecoder, CatalogRepository};
use crate::infrastructure::SeaOrmCatalogRepository;
use crate::modules::scanner::ZbarDecoder;
use crate::naver::NaverClient;
use crate::session::ScanSession;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog repository
    pub catalog: Arc<dyn CatalogRepository>,
    /// Barcode decoder adapter
    pub decoder: Arc<dyn BarcodeDecoder>,
    /// Lookup client; `None` when credentials are not configured
    pub lookup: Option<Arc<NaverClient>>,
    /// The single interactive scan session
    pub session: Arc<Mutex<ScanSession>>,
}

impl AppState {
    /// Create a new AppState over an initialized database connection.
    pub fn new(db: DatabaseConnection, lookup: Option<NaverClient>) -> Self {
        Self {
            catalog: Arc::new(SeaOrmCatalogRepository::new(db)),
            decoder: Arc::new(ZbarDecoder),
            lookup: lookup.map(Arc::new),
            session: Arc::new(Mutex::new(ScanSession::default())),
        }
    }

    /// Swap the barcode decoder (stub decoders in tests).
    pub fn with_decoder(mut self, decoder: Arc<dyn BarcodeDecoder>) -> Self {
        self.decoder = decoder;
        self
    }
}
