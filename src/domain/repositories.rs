//! Port trait definitions
//!
//! These traits define the contracts for the catalog store and the barcode
//! decoder. Implementations live in the infrastructure and scanner modules.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Book;

/// Result of an insert attempt against the catalog.
///
/// A duplicate ISBN is rejected without touching the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Accepted,
    Duplicate,
}

/// Repository trait for the book catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load every cataloged book. An empty catalog yields an empty vec.
    async fn load_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Insert a book, checking for an existing record with the same ISBN
    /// first. Records are immutable once stored.
    async fn insert(&self, book: &Book) -> Result<InsertOutcome, DomainError>;
}

/// Adapter trait for the external barcode decoding engine.
pub trait BarcodeDecoder: Send + Sync {
    /// Decode zero or more textual payloads from raw image bytes.
    ///
    /// An image with no readable symbol (or bytes that are not an image at
    /// all) yields an empty vec. Only an infrastructure fault in the decoder
    /// itself is an error.
    fn decode(&self, image_data: &[u8]) -> Result<Vec<String>, DomainError>;
}
