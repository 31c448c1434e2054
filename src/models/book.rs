use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub thumbnail: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// DTO for API responses and the pending slot.
///
/// `isbn` is digits-only and serves as the catalog key. `thumbnail` is an
/// opaque remote URL, never fetched or cached locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub thumbnail: String,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            isbn: model.isbn,
            title: model.title,
            authors: model.authors,
            publisher: model.publisher,
            thumbnail: model.thumbnail,
        }
    }
}

impl From<Book> for ActiveModel {
    fn from(book: Book) -> Self {
        Self {
            isbn: Set(book.isbn),
            title: Set(book.title),
            authors: Set(book.authors),
            publisher: Set(book.publisher),
            thumbnail: Set(book.thumbnail),
        }
    }
}
