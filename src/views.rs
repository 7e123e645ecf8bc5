//! View rendering
//!
//! The rendering layer is a set of pure functions from view-models to HTML.
//! Handlers shape their data, hand it over here, and never touch markup
//! themselves.

use axum::response::Html;

use crate::models::{Book, SearchResult};

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/search\">Search</a></nav>\n\
         {}\n</body>\n</html>",
        escape(title),
        body
    ))
}

/// Home listing with all persisted records
pub fn home_page(books: &[Book]) -> Html<String> {
    let mut body = String::new();
    body.push_str("<h1>My Bookshelf</h1>\n");
    body.push_str(&format!(
        "<p>{} book(s) in the collection</p>\n<ul>\n",
        books.len()
    ));
    for book in books {
        body.push_str(&format!(
            "<li><a href=\"/books/{}\">{}</a> by {} <em>{}</em></li>\n",
            book.id,
            escape(book.title.as_deref().unwrap_or("Untitled")),
            escape(book.author.as_deref().unwrap_or("unknown")),
            escape(book.bookshelf.as_deref().unwrap_or("")),
        ));
    }
    body.push_str("</ul>\n");
    layout("My Bookshelf", &body)
}

/// Empty search form
pub fn search_form() -> Html<String> {
    let body = "<h1>Search for books</h1>\n\
        <form method=\"post\" action=\"/searches\">\n\
        <input type=\"text\" name=\"search\" placeholder=\"Search term\">\n\
        <label><input type=\"radio\" name=\"search\" value=\"title\" checked> Title</label>\n\
        <label><input type=\"radio\" name=\"search\" value=\"author\"> Author</label>\n\
        <button type=\"submit\">Search</button>\n\
        </form>\n";
    layout("Search", body)
}

/// Search results with one add-form per normalized record.
///
/// The add form submits the chosen fields as repeated `select` inputs; their
/// order is what the add handler relies on, so all four are always emitted.
pub fn search_results(results: &[SearchResult]) -> Html<String> {
    let mut body = String::new();
    body.push_str(&format!("<h1>{} result(s)</h1>\n", results.len()));
    for result in results {
        let title = result.title.as_deref().unwrap_or("Untitled");
        let authors = result.authors.join(", ");
        body.push_str(&format!(
            "<section>\n<img src=\"{}\" alt=\"cover\">\n<h2>{}</h2>\n<p>{}</p>\n<p>{}</p>\n",
            escape(&result.image_url),
            escape(title),
            escape(&authors),
            escape(result.description.as_deref().unwrap_or("")),
        ));
        body.push_str(&format!(
            "<form method=\"post\" action=\"/add\">\n\
             <input type=\"hidden\" name=\"select\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"select\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"select\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"select\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"image_url\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"description\" value=\"{}\">\n\
             <button type=\"submit\">Add to shelf</button>\n\
             </form>\n</section>\n",
            escape(title),
            escape(&authors),
            escape(result.isbn.as_deref().unwrap_or("")),
            escape(result.category.as_deref().unwrap_or("")),
            escape(&result.image_url),
            escape(result.description.as_deref().unwrap_or("")),
        ));
    }
    layout("Search results", &body)
}

/// Detail page for one book, with update and delete forms.
///
/// `book` may be absent; the page still renders, with an empty record.
pub fn book_detail(book: Option<&Book>, id: i32, shelves: &[String]) -> Html<String> {
    let mut body = String::new();
    match book {
        Some(book) => {
            body.push_str(&format!(
                "<h1>{}</h1>\n<img src=\"{}\" alt=\"cover\">\n\
                 <p>by {}</p>\n<p>ISBN: {}</p>\n<p>{}</p>\n",
                escape(book.title.as_deref().unwrap_or("Untitled")),
                escape(book.image_url.as_deref().unwrap_or("")),
                escape(book.author.as_deref().unwrap_or("unknown")),
                escape(book.isbn.as_deref().unwrap_or("")),
                escape(book.description.as_deref().unwrap_or("")),
            ));
            body.push_str(&format!(
                "<form method=\"post\" action=\"/update/{}\">\n\
                 <input type=\"hidden\" name=\"_method\" value=\"PUT\">\n\
                 <input type=\"text\" name=\"title\" value=\"{}\">\n\
                 <input type=\"text\" name=\"author\" value=\"{}\">\n\
                 <input type=\"text\" name=\"isbn\" value=\"{}\">\n\
                 <input type=\"text\" name=\"image_url\" value=\"{}\">\n\
                 <textarea name=\"description\">{}</textarea>\n\
                 <input type=\"text\" name=\"bookshelf\" value=\"{}\" list=\"shelves\">\n\
                 <datalist id=\"shelves\">\n",
                id,
                escape(book.title.as_deref().unwrap_or("")),
                escape(book.author.as_deref().unwrap_or("")),
                escape(book.isbn.as_deref().unwrap_or("")),
                escape(book.image_url.as_deref().unwrap_or("")),
                escape(book.description.as_deref().unwrap_or("")),
                escape(book.bookshelf.as_deref().unwrap_or("")),
            ));
            for shelf in shelves {
                body.push_str(&format!("<option value=\"{}\">\n", escape(shelf)));
            }
            body.push_str(
                "</datalist>\n<button type=\"submit\">Update</button>\n</form>\n",
            );
            body.push_str(&format!(
                "<form method=\"post\" action=\"/delete/{}\">\n\
                 <input type=\"hidden\" name=\"_method\" value=\"DELETE\">\n\
                 <button type=\"submit\">Delete</button>\n</form>\n",
                id
            ));
        }
        None => {
            body.push_str(&format!("<h1>Book {}</h1>\n<p>No book found.</p>\n", id));
        }
    }
    layout("Book details", &body)
}

/// Generic error page; carries no internal detail
pub fn error_page() -> Html<String> {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>\n",
    )
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn detail_page_renders_without_a_record() {
        let Html(page) = book_detail(None, 42, &[]);
        assert!(page.contains("No book found"));
        assert!(page.contains("Book 42"));
    }

    #[test]
    fn search_results_always_emit_four_select_fields() {
        let result = SearchResult {
            image_url: "http://example.com/c.jpg".to_string(),
            title: Some("Dune".to_string()),
            authors: vec![],
            description: None,
            isbn: None,
            category: None,
        };
        let Html(page) = search_results(&[result]);
        assert_eq!(page.matches("name=\"select\"").count(), 4);
    }
}
