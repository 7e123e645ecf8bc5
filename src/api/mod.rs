//! HTTP handlers and routing for the bookshelf server

pub mod books;
pub mod pages;
pub mod searches;

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use tower::Layer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(pages::home))
        .route("/search", get(pages::search_form))
        .route("/books/:id", get(books::book_detail))
        .route("/add", post(books::add_book))
        .route("/searches", post(searches::search_books))
        .route("/update/:id", put(books::update_book))
        .route("/delete/:id", delete(books::delete_book))
        .route("/contact", post(pages::contact))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // `Router::layer` middleware runs after the route has been matched, so
    // the override must wrap the router itself to rewrite the verb before
    // routing.
    Router::new().fallback_service(Layer::layer(&middleware::from_fn(method_override), router))
}

/// Upper bound on buffered form bodies; these forms carry a handful of
/// short text fields.
const FORM_BODY_LIMIT: usize = 64 * 1024;

/// Method-override middleware.
///
/// HTML forms can only submit GET or POST; a POST form may carry a `_method`
/// field naming the verb it actually wants. The field is stripped from the
/// body and the request method replaced before routing, so the PUT and
/// DELETE routes are reachable from plain forms.
pub async fn method_override(req: Request, next: Next) -> Response {
    if req.method() != Method::POST || !is_urlencoded_form(&req) {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();
    let bytes = match to_bytes(body, FORM_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    let (override_method, remaining) = split_method_override(&bytes);
    if let Some(method) = override_method {
        parts.method = method;
    }
    parts
        .headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(remaining.len()));

    next.run(Request::from_parts(parts, Body::from(remaining))).await
}

fn is_urlencoded_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Pull `_method` out of an urlencoded body.
///
/// Returns the override method (if any) and the body with the field removed;
/// all other pairs, including repeated keys, keep their order.
fn split_method_override(body: &[u8]) -> (Option<Method>, Vec<u8>) {
    let mut method = None;
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(body) {
        if key == "_method" {
            if method.is_none() {
                method = Method::from_bytes(value.to_uppercase().as_bytes()).ok();
            }
        } else {
            serializer.append_pair(&key, &value);
        }
    }

    (method, serializer.finish().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_field_is_stripped_and_method_returned() {
        let (method, rest) = split_method_override(b"_method=PUT&title=Dune&author=Herbert");
        assert_eq!(method, Some(Method::PUT));
        assert_eq!(rest, b"title=Dune&author=Herbert");
    }

    #[test]
    fn lowercase_override_is_accepted() {
        let (method, rest) = split_method_override(b"title=Dune&_method=delete");
        assert_eq!(method, Some(Method::DELETE));
        assert_eq!(rest, b"title=Dune");
    }

    #[test]
    fn body_without_override_is_unchanged() {
        let (method, rest) = split_method_override(b"title=Dune&author=Herbert");
        assert_eq!(method, None);
        assert_eq!(rest, b"title=Dune&author=Herbert");
    }

    #[test]
    fn repeated_keys_keep_their_order() {
        let (method, rest) =
            split_method_override(b"select=Dune&select=Herbert&_method=PUT&select=12345");
        assert_eq!(method, Some(Method::PUT));
        assert_eq!(rest, b"select=Dune&select=Herbert&select=12345");
    }

    #[test]
    fn percent_encoding_survives_the_round_trip() {
        let (method, rest) = split_method_override(b"_method=PUT&title=Dune+%26+Drama");
        assert_eq!(method, Some(Method::PUT));
        assert_eq!(rest, b"title=Dune+%26+Drama");
    }
}
