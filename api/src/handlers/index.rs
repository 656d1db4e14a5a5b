//! Index page handler

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
///
/// Category form and client-side word cloud renderer.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
