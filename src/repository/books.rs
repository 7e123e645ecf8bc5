//! Books repository
//!
//! Every statement is parameterized; values reach the database through bind
//! parameters only.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookFields, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books (datastore default order)
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a book by ID, if present
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Distinct bookshelf labels across all records
    pub async fn list_distinct_shelves(&self) -> AppResult<Vec<String>> {
        let shelves = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT bookshelf FROM books WHERE bookshelf IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(shelves)
    }

    /// Insert a new book
    pub async fn insert(&self, book: &NewBook) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO books (author, title, isbn, image_url, description, bookshelf) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(&book.image_url)
        .bind(&book.description)
        .bind(&book.bookshelf)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Most recently inserted book matching the given ISBN.
    ///
    /// Used right after an insert to discover the generated id; ISBN is not
    /// unique, so the newest row wins.
    pub async fn find_by_isbn(&self, isbn: Option<&str>) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE isbn = $1 ORDER BY id DESC LIMIT 1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Replace every field of a book unconditionally.
    ///
    /// A nonexistent id means zero rows affected, which is not an error.
    pub async fn update_by_id(&self, id: i32, fields: &BookFields) -> AppResult<()> {
        sqlx::query(
            "UPDATE books SET title = $1, author = $2, isbn = $3, image_url = $4, \
             description = $5, bookshelf = $6 WHERE id = $7",
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.isbn)
        .bind(&fields.image_url)
        .bind(&fields.description)
        .bind(&fields.bookshelf)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete a book; zero rows matched is not an error
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
