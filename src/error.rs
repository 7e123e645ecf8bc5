//! Error types for the bookshelf server
//!
//! Every failed database query or upstream search call funnels through one
//! error sink: the failure is logged server-side and the client gets a 500
//! with the generic error page. Internal detail never reaches the body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Book search request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Upstream(e) => tracing::error!("Upstream search error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, views::error_page()).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
