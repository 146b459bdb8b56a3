//! Page shell and shared render helpers.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use serde_json::Value;

use crate::http::AppState;
use crate::view::{characters, episodes, locations};

/// Per-section page selection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub characters_page: Option<usize>,
    pub episodes_page: Option<usize>,
    pub locations_page: Option<usize>,
}

/// `GET /` — the whole site on one page, three independent sections.
///
/// Smooth scrolling is set at the document level so a fragment deep link
/// (`#characters`, `#episodes`, `#locations`) scrolls once on load and is
/// never re-applied afterwards.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let (characters, episodes, locations) = tokio::join!(
        characters::render(&state, params.characters_page),
        episodes::render(&state, params.episodes_page),
        locations::render(&state, params.locations_page),
    );

    Html(format!(
        r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Springfield Hub</title>
<style>
html {{ scroll-behavior: smooth; }}
body {{ margin: 0; font-family: sans-serif; color: #222; }}
header {{ padding: 1rem 2rem; background: #ffd90f; }}
header nav a {{ margin-right: 1rem; color: #222; }}
section {{ padding: 2rem; }}
.grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1rem; }}
.card {{ border: 1px solid #ddd; border-radius: 6px; padding: 1rem; }}
.card img {{ width: 100%; height: 10rem; object-fit: cover; }}
.initials {{ display: flex; align-items: center; justify-content: center; height: 10rem; background: #fdf3c0; font-size: 2rem; font-weight: bold; }}
.quote {{ font-style: italic; color: #555; }}
.error {{ color: #b00020; }}
.pager {{ margin-top: 1.5rem; text-align: center; }}
.pager .page {{ display: inline-block; margin: 0 0.15rem; padding: 0.2rem 0.6rem; border: 1px solid #ccc; border-radius: 4px; }}
.pager .current {{ background: #ffd90f; }}
.pager .disabled {{ opacity: 0.5; }}
.page-note {{ text-align: center; color: #666; font-size: 0.9rem; }}
</style>
</head>
<body>
<header>
<h1>Springfield Hub</h1>
<nav><a href="#characters">Characters</a><a href="#episodes">Episodes</a><a href="#locations">Locations</a></nav>
</header>
{characters}
{episodes}
{locations}
</body>
</html>
"##
    ))
}

/// Minimal HTML escaping for untrusted provider strings.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display form of an arbitrary provider value (objects keep JSON syntax).
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JS-style truthiness: null, false, 0, NaN and "" are falsy.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
