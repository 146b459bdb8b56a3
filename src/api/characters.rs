//! Characters proxy endpoint.
//!
//! One upstream fetch, strict shape check, then per-element normalization:
//! identifier, display name, repaired image URL, quote and job with literal
//! placeholder defaults. Unrecognized upstream fields are merged onto the
//! output after the normalized ones, so upstream keys win on collision.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};

use crate::api::ProxyError;
use crate::http::cors::cors_headers;
use crate::http::AppState;
use crate::observability::metrics;
use crate::upstream::{UpstreamClient, CHARACTERS_PATH};

/// Base prepended to relative image paths from the provider.
const IMAGE_BASE: &str = "https://api.sampleapis.com/simpsons/";

/// Placeholder display name.
const UNKNOWN_NAME: &str = "Unknown Character";

/// Placeholder when the provider has no quote for a character.
const NO_QUOTE: &str = "No quote available";

/// Placeholder job.
const UNKNOWN_JOB: &str = "Unknown";

/// `GET /api/characters`
pub async fn get_characters(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    match fetch(&state.upstream).await {
        Ok(characters) => {
            metrics::record_proxy_request("characters", 200, started);
            (
                StatusCode::OK,
                cors_headers(),
                Json(Value::Array(characters)),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "characters fetch failed");
            metrics::record_proxy_request("characters", 500, started);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({ "error": "Failed to fetch characters" })),
            )
                .into_response()
        }
    }
}

/// Fetch and normalize the upstream character list.
///
/// Any upstream failure and any non-array body are fatal here; this is the
/// strictest of the three endpoints.
pub async fn fetch(client: &UpstreamClient) -> Result<Vec<Value>, ProxyError> {
    let body = client.get_json(&client.primary_url(CHARACTERS_PATH)).await?;

    let Value::Array(raw) = body else {
        return Err(ProxyError::NotAnArray);
    };

    Ok(raw.iter().map(normalize_character).collect())
}

/// Coerce one upstream character object into the canonical shape.
///
/// The canonical fields are written first; every upstream field is then
/// copied over them, so an upstream key survives a collision.
pub fn normalize_character(raw: &Value) -> Value {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let mut out = Map::new();

    if let Some(id) = character_id(obj) {
        out.insert("id".to_string(), id);
    }

    let name = obj
        .get("name")
        .filter(|v| truthy(v))
        .cloned()
        .unwrap_or_else(|| Value::String(UNKNOWN_NAME.to_string()));
    out.insert("name".to_string(), name);

    let image = obj
        .get("image")
        .filter(|v| truthy(v))
        .or_else(|| obj.get("avatar").filter(|v| truthy(v)))
        .and_then(Value::as_str)
        .unwrap_or("");
    out.insert(
        "image".to_string(),
        Value::String(process_image_url(image)),
    );

    let quote = obj
        .get("quote")
        .filter(|v| truthy(v))
        .or_else(|| obj.get("catchPhrase").filter(|v| truthy(v)))
        .cloned()
        .unwrap_or_else(|| Value::String(NO_QUOTE.to_string()));
    out.insert("quote".to_string(), quote);

    let job = obj
        .get("job")
        .filter(|v| truthy(v))
        .or_else(|| first_occupation(obj))
        .cloned()
        .unwrap_or_else(|| Value::String(UNKNOWN_JOB.to_string()));
    out.insert("job".to_string(), job);

    for (key, value) in obj {
        out.insert(key.clone(), value.clone());
    }

    Value::Object(out)
}

/// Repair a provider image URL.
///
/// Policy:
/// 1. empty input → empty string
/// 2. protocol-relative (`//…`) → prefix `https:`
/// 3. not starting with `http` → relative path on the provider base,
///    with a single leading slash stripped
/// 4. otherwise unchanged
pub fn process_image_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("//") {
        return format!("https:{url}");
    }

    if !url.starts_with("http") {
        let path = url.strip_prefix('/').unwrap_or(url);
        return format!("{IMAGE_BASE}{path}");
    }

    url.to_string()
}

/// Derive the identifier: stringified `id`, then `_id`, then a slug of the
/// name. Returns `None` when all three are missing so the key is omitted.
fn character_id(obj: &Map<String, Value>) -> Option<Value> {
    let from_id = obj
        .get("id")
        .and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty());
    if let Some(id) = from_id {
        return Some(Value::String(id));
    }

    if let Some(underscore_id) = obj.get("_id").filter(|v| truthy(v)) {
        return Some(underscore_id.clone());
    }

    obj.get("name")
        .and_then(Value::as_str)
        .map(slugify)
        .filter(|s| !s.is_empty())
        .map(Value::String)
}

/// Lowercase the name and collapse each whitespace run into one dash.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            in_space = false;
        }
    }
    slug
}

fn first_occupation(obj: &Map<String, Value>) -> Option<&Value> {
    obj.get("occupation")
        .and_then(Value::as_array)
        .and_then(|occupations| occupations.first())
        .filter(|v| truthy(v))
}

/// JS-style truthiness: null, false, 0, NaN and "" are falsy.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_image_url_empty() {
        assert_eq!(process_image_url(""), "");
    }

    #[test]
    fn test_process_image_url_protocol_relative() {
        assert_eq!(
            process_image_url("//cdn.x/y.png"),
            "https://cdn.x/y.png"
        );
    }

    #[test]
    fn test_process_image_url_relative_path() {
        assert_eq!(
            process_image_url("foo.png"),
            "https://api.sampleapis.com/simpsons/foo.png"
        );
        // A single leading slash is stripped before joining.
        assert_eq!(
            process_image_url("/foo.png"),
            "https://api.sampleapis.com/simpsons/foo.png"
        );
    }

    #[test]
    fn test_process_image_url_absolute_unchanged() {
        assert_eq!(
            process_image_url("https://already.full/url.png"),
            "https://already.full/url.png"
        );
        assert_eq!(
            process_image_url("http://plain.example/a.png"),
            "http://plain.example/a.png"
        );
    }

    #[test]
    fn test_id_precedence() {
        let with_id = json!({ "id": 0, "name": "Homer Simpson" });
        assert_eq!(normalize_character(&with_id)["id"], json!(0));

        let with_underscore = json!({ "_id": "abc123", "name": "Homer Simpson" });
        // `_id` only applies once `id` is absent, and it is kept as-is.
        assert_eq!(normalize_character(&with_underscore)["id"], json!("abc123"));

        let name_only = json!({ "name": "Homer  Simpson" });
        assert_eq!(
            normalize_character(&name_only)["id"],
            json!("homer-simpson")
        );

        let nothing = json!({ "quote": "D'oh!" });
        assert!(normalize_character(&nothing).get("id").is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let bare = json!({});
        let out = normalize_character(&bare);
        assert_eq!(out["name"], json!("Unknown Character"));
        assert_eq!(out["image"], json!(""));
        assert_eq!(out["quote"], json!("No quote available"));
        assert_eq!(out["job"], json!("Unknown"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let raw = json!({ "name": "", "quote": "", "catchPhrase": "Ay caramba!" });
        let out = normalize_character(&raw);
        assert_eq!(out["name"], json!("Unknown Character"));
        // The chain resolves through catchPhrase, but the merge then puts
        // the raw empty "quote" back on top.
        assert_eq!(out["quote"], json!(""));
        assert_eq!(out["catchPhrase"], json!("Ay caramba!"));
    }

    #[test]
    fn test_avatar_and_occupation_fallbacks() {
        let raw = json!({
            "name": "Marge Simpson",
            "avatar": "//static.x/marge.png",
            "occupation": ["Homemaker", "Police Officer"],
        });
        let out = normalize_character(&raw);
        assert_eq!(out["image"], json!("https://static.x/marge.png"));
        assert_eq!(out["job"], json!("Homemaker"));
    }

    #[test]
    fn test_upstream_fields_override_normalized_ones() {
        // The merge order lets raw upstream values clobber the repaired
        // ones, including the id and the processed image URL.
        let raw = json!({
            "id": 7,
            "name": "Homer Simpson",
            "image": "//cdn.x/homer.png",
            "job": "Safety Inspector",
        });
        let out = normalize_character(&raw);
        assert_eq!(out["id"], json!(7));
        assert_eq!(out["image"], json!("//cdn.x/homer.png"));
        assert_eq!(out["job"], json!("Safety Inspector"));
    }

    #[test]
    fn test_non_object_elements_get_placeholders() {
        let out = normalize_character(&json!("stray string"));
        assert_eq!(out["name"], json!("Unknown Character"));
        assert!(out.get("id").is_none());
    }
}
