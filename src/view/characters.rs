//! Characters section.
//!
//! Fetches through the proxy layer, re-derives card fields on its own
//! (identifier, placeholders), and paginates ten cards to a page. Empty or
//! failed fetches render an inline error with a Retry control that reloads
//! the page.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value};

use crate::api;
use crate::http::AppState;
use crate::view::page::{display_value, escape_html, truthy};
use crate::view::pagination;

/// Characters shown per page.
const ITEMS_PER_PAGE: usize = 10;

/// One character card, derived defensively from the proxy payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quote: String,
    pub job: String,
}

/// Render the characters section for the requested page.
pub async fn render(state: &AppState, requested_page: Option<usize>) -> String {
    let cards = match load(state).await {
        Some(cards) => cards,
        None => return render_error(),
    };

    let total = pagination::total_pages(cards.len(), ITEMS_PER_PAGE);
    let page = pagination::clamp_page(requested_page, total);
    let visible = pagination::page_slice(&cards, page, ITEMS_PER_PAGE);

    let mut html =
        String::from("<section id=\"characters\"><h2>Characters</h2><div class=\"grid\">");
    for card in visible {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>");
    if cards.len() > ITEMS_PER_PAGE {
        html.push_str(&pagination::render_controls(
            "characters_page",
            "characters",
            page,
            total,
        ));
    }
    html.push_str(&format!(
        "<p class=\"page-note\">Page {page} of {total}</p>"
    ));
    html.push_str("</section>");
    html
}

/// One-shot fetch; an upstream failure or an empty list both surface as the
/// same inline error.
async fn load(state: &AppState) -> Option<Vec<CharacterCard>> {
    let raw = match api::characters::fetch(&state.upstream).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "characters section fetch failed");
            return None;
        }
    };

    if raw.is_empty() {
        tracing::warn!("characters section got an empty list");
        return None;
    }

    let synthetic = synthetic_id();
    Some(raw.iter().map(|value| normalize(value, &synthetic)).collect())
}

/// Re-derive card fields from one proxy element, without trusting the wire
/// shape: identifier falls back to a timestamp-based synthetic one.
pub fn normalize(raw: &Value, synthetic_id: &str) -> CharacterCard {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let id = obj
        .get("id")
        .and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| synthetic_id.to_string());

    CharacterCard {
        id,
        name: pick(obj, &["name"]).unwrap_or_else(|| "Unknown Character".to_string()),
        image: pick(obj, &["image"]).unwrap_or_default(),
        quote: pick(obj, &["quote"]).unwrap_or_else(|| "No quote available".to_string()),
        job: pick(obj, &["job"]).unwrap_or_default(),
    }
}

/// First truthy field among `keys`, in display form.
fn pick(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| truthy(v))
        .map(display_value)
}

fn synthetic_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("char-{millis}")
}

fn render_card(card: &CharacterCard) -> String {
    let media = if card.image.is_empty() {
        format!(
            "<div class=\"initials\">{}</div>",
            escape_html(&initials(&card.name))
        )
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&card.image),
            escape_html(&card.name)
        )
    };

    let quote = if card.quote.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"quote\">&ldquo;{}&rdquo;</p>",
            escape_html(&card.quote)
        )
    };

    format!(
        "<article class=\"card\">{media}<h3>{}</h3>{quote}</article>",
        escape_html(&card.name)
    )
}

/// First letter of each name word, for the imageless placeholder.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn render_error() -> String {
    "<section id=\"characters\"><h2>Characters</h2>\
     <p class=\"error\">Error loading characters. Please try again later.</p>\
     <a class=\"retry\" href=\"/\">Retry</a>\
     </section>"
        .to_string()
}
