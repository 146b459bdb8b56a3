//! Episodes section.
//!
//! The proxy passes episode objects through untouched, so this view owns
//! the whole normalization: nullish-coalescing chains over the known field
//! spellings, with everything else kept as passthrough rows on the card.

use serde_json::{Map, Value};

use crate::api;
use crate::http::AppState;
use crate::view::page::{display_value, escape_html};
use crate::view::pagination;

/// Episodes shown per page.
const ITEMS_PER_PAGE: usize = 12;

/// Fields consumed by the card layout; everything else is a passthrough row.
const KNOWN_FIELDS: [&str; 6] = ["id", "name", "title", "season", "episode", "airDate"];

/// Passthrough rows shown per card.
const MAX_EXTRA_ROWS: usize = 6;

/// One episode card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCard {
    pub id: String,
    pub name: String,
    pub title: String,
    pub season: String,
    pub episode: String,
    pub air_date: String,
    pub extras: Vec<(String, String)>,
}

/// Render the episodes section for the requested page.
pub async fn render(state: &AppState, requested_page: Option<usize>) -> String {
    let cards = match load(state).await {
        Some(cards) => cards,
        None => return render_error(),
    };

    let total = pagination::total_pages(cards.len(), ITEMS_PER_PAGE);
    let page = pagination::clamp_page(requested_page, total);
    let visible = pagination::page_slice(&cards, page, ITEMS_PER_PAGE);

    let mut html = String::from("<section id=\"episodes\"><h2>Episodes</h2><div class=\"grid\">");
    for card in visible {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>");
    if cards.len() > ITEMS_PER_PAGE {
        html.push_str(&pagination::render_controls(
            "episodes_page",
            "episodes",
            page,
            total,
        ));
    }
    html.push_str("</section>");
    html
}

async fn load(state: &AppState) -> Option<Vec<EpisodeCard>> {
    let raw = match api::episodes::fetch(&state.upstream).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "episodes section fetch failed");
            return None;
        }
    };

    if raw.is_empty() {
        tracing::warn!("episodes section got an empty list");
        return None;
    }

    Some(
        raw.iter()
            .enumerate()
            .map(|(index, value)| normalize(value, index))
            .collect(),
    )
}

/// Derive card fields from one episode object.
///
/// The chains are nullish, not falsy: a season of `0` or an empty title
/// stays what it is, only `null`/absent falls through.
pub fn normalize(raw: &Value, index: usize) -> EpisodeCard {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    EpisodeCard {
        id: first_present(obj, &["id", "_id"])
            .map(display_value)
            .unwrap_or_else(|| index.to_string()),
        name: first_present(obj, &["name", "title"])
            .map(display_value)
            .unwrap_or_else(|| format!("Episode {}", index + 1)),
        title: first_present(obj, &["title", "name"])
            .map(display_value)
            .unwrap_or_default(),
        season: first_present(obj, &["season", "seasonNumber", "Season"])
            .map(display_value)
            .unwrap_or_default(),
        episode: first_present(obj, &["episode", "episodeNumber", "Episode"])
            .map(display_value)
            .unwrap_or_default(),
        air_date: first_present(obj, &["airDate", "air_date"])
            .map(display_value)
            .unwrap_or_default(),
        extras: obj
            .iter()
            .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
            .take(MAX_EXTRA_ROWS)
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect(),
    }
}

/// First non-null field among `keys`.
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| !v.is_null())
}

fn render_card(card: &EpisodeCard) -> String {
    let heading = if card.title.is_empty() {
        &card.name
    } else {
        &card.title
    };

    let air_date = if card.air_date.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"air-date\">Air date: {}</p>",
            escape_html(&card.air_date)
        )
    };

    let mut rows = String::new();
    for (key, value) in &card.extras {
        rows.push_str(&format!(
            "<div class=\"row\"><span class=\"key\">{}:</span> <span>{}</span></div>",
            escape_html(key),
            escape_html(value)
        ));
    }

    format!(
        "<article class=\"card\"><h3>{}</h3>\
         <p>Season {} &middot; Episode {}</p>{air_date}{rows}</article>",
        escape_html(heading),
        escape_html(&card.season),
        escape_html(&card.episode)
    )
}

fn render_error() -> String {
    "<section id=\"episodes\"><h2>Episodes</h2>\
     <p class=\"error\">Failed to load episodes. Please try again later.</p>\
     </section>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nullish_chains_keep_zero_and_empty() {
        let card = normalize(&json!({ "season": 0, "title": "" }), 4);
        assert_eq!(card.season, "0");
        assert_eq!(card.title, "");
        // The empty title is present, not null, so the name chain stops there.
        assert_eq!(card.name, "");
    }

    #[test]
    fn test_index_fallbacks() {
        let card = normalize(&json!({}), 2);
        assert_eq!(card.id, "2");
        assert_eq!(card.name, "Episode 3");
        assert_eq!(card.title, "");
        assert_eq!(card.air_date, "");
    }

    #[test]
    fn test_alternate_spellings() {
        let card = normalize(
            &json!({
                "_id": "s01e05",
                "seasonNumber": 1,
                "episodeNumber": 5,
                "air_date": "1990-02-04",
                "name": "Bart the General",
            }),
            0,
        );
        assert_eq!(card.id, "s01e05");
        assert_eq!(card.season, "1");
        assert_eq!(card.episode, "5");
        assert_eq!(card.air_date, "1990-02-04");
        assert_eq!(card.title, "Bart the General");
    }

    #[test]
    fn test_extras_capped_and_filtered() {
        let card = normalize(
            &json!({
                "id": 1,
                "name": "n",
                "rating": 8.2,
                "writer": "a",
                "director": "b",
                "thumbnailUrl": "c",
                "description": "d",
                "views": 10,
                "language": "en",
            }),
            0,
        );
        assert_eq!(card.extras.len(), MAX_EXTRA_ROWS);
        assert!(card.extras.iter().all(|(key, _)| key != "id" && key != "name"));
    }

    #[test]
    fn test_card_heading_prefers_title() {
        let with_title = normalize(&json!({ "title": "Krusty Gets Busted", "name": "x" }), 0);
        assert!(render_card(&with_title).contains("Krusty Gets Busted"));

        let name_only = normalize(&json!({ "name": "Moaning Lisa" }), 0);
        assert!(render_card(&name_only).contains("Moaning Lisa"));
    }
}
