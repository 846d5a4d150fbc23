//! Catalog (books) service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book. ISBNs are unique.
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        if let Some(existing) = self.repository.books.get_by_isbn(&book.isbn).await? {
            return Err(AppError::Conflict(format!(
                "ISBN {} already belongs to book {}",
                book.isbn, existing.id
            )));
        }

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Catalog: created book id={} isbn={}", created.id, created.isbn);
        Ok(created)
    }
}
