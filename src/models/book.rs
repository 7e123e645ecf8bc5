//! Book model and form payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted book record
///
/// Only the primary key is enforced by the schema; every other column is
/// nullable text, and the full-replace update flow writes NULL for any field
/// missing from the submitted form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub author: Option<String>,
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub bookshelf: Option<String>,
}

/// Form payload of the add flow.
///
/// The search-results page submits the chosen result as repeated `select`
/// fields at fixed positions (0 = title, 1 = author, 2 = isbn, 3 = bookshelf)
/// alongside named `image_url` and `description` fields.
#[derive(Debug, Deserialize)]
pub struct AddBookForm {
    #[serde(default)]
    pub select: Vec<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Fields of a book about to be inserted
#[derive(Debug, Clone)]
pub struct NewBook {
    pub author: Option<String>,
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub bookshelf: Option<String>,
}

impl From<AddBookForm> for NewBook {
    fn from(form: AddBookForm) -> Self {
        Self {
            title: form.select.first().cloned(),
            author: form.select.get(1).cloned(),
            isbn: form.select.get(2).cloned(),
            bookshelf: form.select.get(3).cloned(),
            image_url: form.image_url,
            description: form.description,
        }
    }
}

/// Full field set submitted by the update form.
///
/// Every field is replaced unconditionally; a field absent from the body is
/// written back as NULL rather than left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub bookshelf: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_from_positional_selection() {
        let form = AddBookForm {
            select: vec![
                "Dune".to_string(),
                "Frank Herbert".to_string(),
                "9780441013593".to_string(),
                "Fiction".to_string(),
            ],
            image_url: Some("http://example.com/cover.jpg".to_string()),
            description: Some("A desert planet.".to_string()),
        };

        let book = NewBook::from(form);
        assert_eq!(book.title.as_deref(), Some("Dune"));
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.isbn.as_deref(), Some("9780441013593"));
        assert_eq!(book.bookshelf.as_deref(), Some("Fiction"));
        assert_eq!(book.image_url.as_deref(), Some("http://example.com/cover.jpg"));
    }

    #[test]
    fn new_book_tolerates_short_selection() {
        let form = AddBookForm {
            select: vec!["Dune".to_string()],
            image_url: None,
            description: None,
        };

        let book = NewBook::from(form);
        assert_eq!(book.title.as_deref(), Some("Dune"));
        assert!(book.author.is_none());
        assert!(book.isbn.is_none());
        assert!(book.bookshelf.is_none());
    }
}
