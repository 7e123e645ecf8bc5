//! Collection endpoints

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::Form;

use crate::{
    error::AppResult,
    models::book::{AddBookForm, BookFields, NewBook},
    views, AppState,
};

/// Book detail page.
///
/// An id with no matching row still renders the detail view, just with an
/// empty record; it is not a 404.
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let book = state.services.catalog.get_book(id).await?;
    let shelves = state.services.catalog.list_shelves().await?;
    Ok(views::book_detail(book.as_ref(), id, &shelves))
}

/// Persist a chosen search result, then redirect to its detail page
pub async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<AddBookForm>,
) -> AppResult<Redirect> {
    let book = state.services.catalog.add_book(NewBook::from(form)).await?;
    Ok(Redirect::to(&format!("/books/{}", book.id)))
}

/// Full-field replace; redirects to the detail page whether or not the id
/// matched a row.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(fields): Form<BookFields>,
) -> AppResult<Redirect> {
    state.services.catalog.update_book(id, &fields).await?;
    Ok(Redirect::to(&format!("/books/{}", id)))
}

/// Remove a book, then redirect to the home listing
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to("/"))
}
