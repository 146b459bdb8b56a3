//! Locations section.
//!
//! The only place static data stands in for a live fetch: when the proxy
//! hands back an empty list (which it does on every upstream failure), the
//! curated Springfield entries take over, in their declared order.

use serde_json::{Map, Value};

use crate::api;
use crate::http::AppState;
use crate::view::fallback;
use crate::view::page::{display_value, escape_html};
use crate::view::pagination;

/// Locations shown per page.
const ITEMS_PER_PAGE: usize = 12;

/// Passthrough rows shown per card.
const MAX_EXTRA_ROWS: usize = 8;

/// One location card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCard {
    pub id: String,
    pub name: String,
    pub extras: Vec<(String, String)>,
}

/// Render the locations section for the requested page.
pub async fn render(state: &AppState, requested_page: Option<usize>) -> String {
    let live = api::locations::fetch(&state.upstream).await;
    let source = if live.is_empty() {
        fallback::curated_locations()
    } else {
        live
    };

    let cards: Vec<LocationCard> = source
        .iter()
        .enumerate()
        .map(|(index, value)| normalize(value, index))
        .collect();

    let total = pagination::total_pages(cards.len(), ITEMS_PER_PAGE);
    let page = pagination::clamp_page(requested_page, total);
    let visible = pagination::page_slice(&cards, page, ITEMS_PER_PAGE);

    let mut html =
        String::from("<section id=\"locations\"><h2>Locations</h2><div class=\"grid\">");
    for card in visible {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>");
    if cards.len() > ITEMS_PER_PAGE {
        html.push_str(&pagination::render_controls(
            "locations_page",
            "locations",
            page,
            total,
        ));
    }
    html.push_str("</section>");
    html
}

/// Derive card fields from one location object. Chains are nullish.
pub fn normalize(raw: &Value, index: usize) -> LocationCard {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    LocationCard {
        id: obj
            .get("id")
            .filter(|v| !v.is_null())
            .map(display_value)
            .unwrap_or_else(|| index.to_string()),
        name: obj
            .get("name")
            .filter(|v| !v.is_null())
            .or_else(|| obj.get("title").filter(|v| !v.is_null()))
            .map(display_value)
            .unwrap_or_else(|| "Unknown location".to_string()),
        extras: obj
            .iter()
            .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "name")
            .take(MAX_EXTRA_ROWS)
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect(),
    }
}

fn render_card(card: &LocationCard) -> String {
    let mut rows = String::new();
    for (key, value) in &card.extras {
        rows.push_str(&format!(
            "<div class=\"row\"><span class=\"key\">{}:</span> <span>{}</span></div>",
            escape_html(key),
            escape_html(value)
        ));
    }

    format!(
        "<article class=\"card\"><h3>{}</h3>{rows}</article>",
        escape_html(&card.name)
    )
}
