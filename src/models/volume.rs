//! External volume records and their normalization
//!
//! The search API returns nested volume metadata; handlers only ever see the
//! flat [`SearchResult`] produced by the `From<Volume>` mapping.

use serde::Deserialize;

/// URL template for a volume's front-cover image, keyed by the external id
const COVER_URL_TEMPLATE: &str =
    "https://books.google.com/books/content?id={id}&printsec=frontcover&img=1&zoom=5&edge=curl&source=gbs_api";

/// One search-response item as returned by the volumes endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

/// Nested volume metadata
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
    #[serde(rename = "industryIdentifiers", default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
    pub categories: Option<Categories>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryIdentifier {
    pub identifier: String,
}

/// Upstream `categories` field: sometimes a list, sometimes a bare string.
///
/// Decoded as an explicit union rather than sniffed at runtime; the view
/// layer expects a single scalar, so [`Categories::first`] projects a list
/// onto its first element and keeps a scalar unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    List(Vec<String>),
    Scalar(String),
}

impl Categories {
    pub fn first(self) -> Option<String> {
        match self {
            Categories::List(values) => values.into_iter().next(),
            Categories::Scalar(value) => Some(value),
        }
    }
}

/// Search-response envelope
///
/// `items` is deliberately required: a response without it (zero results)
/// surfaces as a decode failure routed to the error sink.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Volume>,
}

/// Flat display record for one external search result
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub image_url: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
}

impl From<Volume> for SearchResult {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;
        Self {
            image_url: COVER_URL_TEMPLATE.replace("{id}", &volume.id),
            title: info.title,
            authors: info.authors,
            description: info.description,
            isbn: info
                .industry_identifiers
                .into_iter()
                .next()
                .map(|i| i.identifier),
            category: info.categories.and_then(Categories::first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn volume(value: serde_json::Value) -> Volume {
        serde_json::from_value(value).expect("volume should decode")
    }

    #[test]
    fn category_list_keeps_first_element() {
        let result = SearchResult::from(volume(json!({
            "id": "abc123",
            "volumeInfo": {
                "title": "Dune",
                "categories": ["Fiction", "Drama"]
            }
        })));
        assert_eq!(result.category.as_deref(), Some("Fiction"));
    }

    #[test]
    fn category_scalar_kept_unchanged() {
        let result = SearchResult::from(volume(json!({
            "id": "abc123",
            "volumeInfo": {
                "title": "Dune",
                "categories": "Fiction"
            }
        })));
        assert_eq!(result.category.as_deref(), Some("Fiction"));
    }

    #[test]
    fn category_absent_stays_absent() {
        let result = SearchResult::from(volume(json!({
            "id": "abc123",
            "volumeInfo": { "title": "Dune" }
        })));
        assert!(result.category.is_none());
    }

    #[test]
    fn isbn_is_first_industry_identifier() {
        let result = SearchResult::from(volume(json!({
            "id": "abc123",
            "volumeInfo": {
                "title": "Dune",
                "industryIdentifiers": [
                    { "type": "ISBN_13", "identifier": "9780441013593" },
                    { "type": "ISBN_10", "identifier": "0441013597" }
                ]
            }
        })));
        assert_eq!(result.isbn.as_deref(), Some("9780441013593"));
    }

    #[test]
    fn missing_identifiers_yield_absent_isbn() {
        let result = SearchResult::from(volume(json!({
            "id": "abc123",
            "volumeInfo": { "title": "Dune" }
        })));
        assert!(result.isbn.is_none());
    }

    #[test]
    fn cover_url_is_built_from_external_id() {
        let result = SearchResult::from(volume(json!({
            "id": "abc123",
            "volumeInfo": { "title": "Dune" }
        })));
        assert_eq!(
            result.image_url,
            "https://books.google.com/books/content?id=abc123&printsec=frontcover&img=1&zoom=5&edge=curl&source=gbs_api"
        );
    }

    #[test]
    fn response_without_items_fails_to_decode() {
        let parsed: Result<SearchResponse, _> =
            serde_json::from_value(json!({ "totalItems": 0 }));
        assert!(parsed.is_err());
    }
}
