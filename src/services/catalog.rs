//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields, NewBook},
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

    /// List all books in the collection
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all().await
    }

    /// Get a single book, if present
    pub async fn get_book(&self, id: i32) -> AppResult<Option<Book>> {
        self.repository.books.get_by_id(id).await
    }

    /// Distinct shelf labels for the detail view
    pub async fn list_shelves(&self) -> AppResult<Vec<String>> {
        self.repository.books.list_distinct_shelves().await
    }

    /// Persist a chosen search result and return the stored record.
    ///
    /// Insert and ISBN lookup are two independent statements with no
    /// transaction around them; a concurrent insert or delete between the two
    /// is an accepted race.
    pub async fn add_book(&self, book: NewBook) -> AppResult<Book> {
        self.repository.books.insert(&book).await?;

        self.repository
            .books
            .find_by_isbn(book.isbn.as_deref())
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("inserted book not found by isbn {:?}", book.isbn))
            })
    }

    /// Replace every field of a book.
    ///
    /// A nonexistent id is reported as success (zero rows affected); callers
    /// redirect regardless.
    pub async fn update_book(&self, id: i32, fields: &BookFields) -> AppResult<()> {
        self.repository.books.update_by_id(id, fields).await
    }

    /// Remove a book from the collection
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete_by_id(id).await
    }
}
