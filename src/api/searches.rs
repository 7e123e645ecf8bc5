//! External search endpoints

use axum::{extract::State, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{error::AppResult, services::search::SearchMode, views, AppState};

/// Search form payload: repeated `search` fields at fixed positions
/// (0 = term, 1 = mode).
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: Vec<String>,
}

/// Run one external search and render the results
pub async fn search_books(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let term = form.search.first().cloned().unwrap_or_default();
    let mode = SearchMode::from_param(form.search.get(1).map(String::as_str).unwrap_or(""));

    let results = state.services.search.search(&term, mode).await?;
    Ok(views::search_results(&results))
}
