//! SeaORM implementation of CatalogRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::domain::{CatalogRepository, DomainError, InsertOutcome};
use crate::models::Book;
use crate::models::book::{ActiveModel, Entity as BookEntity};

/// SeaORM-based implementation of CatalogRepository
pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn load_all(&self) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find().all(&self.db).await?;
        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn insert(&self, book: &Book) -> Result<InsertOutcome, DomainError> {
        // Existence check first. Not atomic against concurrent callers; the
        // single session mutex upstream serializes all catalog writes.
        let existing = BookEntity::find_by_id(book.isbn.clone())
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Ok(InsertOutcome::Duplicate);
        }

        let record: ActiveModel = book.clone().into();
        record.insert(&self.db).await?;

        Ok(InsertOutcome::Accepted)
    }
}
