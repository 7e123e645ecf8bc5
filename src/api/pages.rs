//! Plain page endpoints

use axum::{extract::State, http::StatusCode, response::Html};

use crate::{error::AppResult, views, AppState};

/// Home listing of the whole collection
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.catalog.list_books().await?;
    Ok(views::home_page(&books))
}

/// Empty search form
pub async fn search_form() -> Html<String> {
    views::search_form()
}

/// Placeholder kept from the original site: renders the home template with
/// no records.
pub async fn contact() -> Html<String> {
    views::home_page(&[])
}

/// Terminal fallback for unmatched routes
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
