//! External book-search client
//!
//! Issues one GET per search against the configured volumes endpoint and maps
//! each response item into the flat display shape. No retries, no throttling.

use reqwest::Client;

use crate::{
    config::SearchConfig,
    error::AppResult,
    models::volume::{SearchResponse, SearchResult},
};

/// How the free-text term is scoped in the outbound query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Title,
    Author,
    Any,
}

impl SearchMode {
    /// Parse the form's mode value; anything unrecognized searches unscoped
    pub fn from_param(value: &str) -> Self {
        match value {
            "title" => SearchMode::Title,
            "author" => SearchMode::Author,
            _ => SearchMode::Any,
        }
    }
}

/// Build the `q` parameter for the volumes endpoint
fn build_query(term: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::Title => format!("+intitle:{}", term),
        SearchMode::Author => format!("inauthor:{}", term),
        SearchMode::Any => term.to_string(),
    }
}

#[derive(Clone)]
pub struct SearchService {
    http: Client,
    endpoint: String,
}

impl SearchService {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint,
        }
    }

    /// Run one search against the external API.
    ///
    /// Transport failures, non-success statuses and undecodable bodies all
    /// propagate to the shared error sink; result order is preserved from the
    /// upstream response.
    pub async fn search(&self, term: &str, mode: SearchMode) -> AppResult<Vec<SearchResult>> {
        let query = build_query(term, mode);
        tracing::debug!("Book search: q={}", query);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        Ok(body.items.into_iter().map(SearchResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_mode_uses_intitle_qualifier() {
        assert_eq!(build_query("Dune", SearchMode::Title), "+intitle:Dune");
    }

    #[test]
    fn author_mode_uses_inauthor_qualifier() {
        assert_eq!(
            build_query("Herbert", SearchMode::Author),
            "inauthor:Herbert"
        );
    }

    #[test]
    fn other_modes_search_unscoped() {
        assert_eq!(build_query("Dune", SearchMode::Any), "Dune");
    }

    #[test]
    fn unrecognized_param_falls_back_to_unscoped() {
        assert_eq!(SearchMode::from_param("title"), SearchMode::Title);
        assert_eq!(SearchMode::from_param("author"), SearchMode::Author);
        assert_eq!(SearchMode::from_param("subject"), SearchMode::Any);
        assert_eq!(SearchMode::from_param(""), SearchMode::Any);
    }
}
