//! Data models for the bookshelf server

pub mod book;
pub mod volume;

// Re-export commonly used types
pub use book::{AddBookForm, Book, BookFields, NewBook};
pub use volume::{SearchResult, Volume};
