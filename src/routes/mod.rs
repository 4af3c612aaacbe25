pub mod diagnostics;
pub mod standings;

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / - Landing page
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
