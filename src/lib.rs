//! Bookshelf - server-rendered book catalog manager
//!
//! Lets a user browse a persisted book collection, search the Google Books
//! API, add a found result to the collection, and edit or remove entries.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
