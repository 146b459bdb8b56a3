//! Episodes proxy endpoint.
//!
//! Primary fetch with one fallback hop: a non-success status from the
//! primary provider (and only that failure class) triggers a second fetch
//! against the fallback provider. No field normalization happens here; the
//! list view owns all of it.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::http::cors::cors_headers;
use crate::http::AppState;
use crate::observability::metrics;
use crate::upstream::{UpstreamClient, UpstreamError, EPISODES_PATH};

/// `GET /api/episodes`
pub async fn get_episodes(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    match fetch(&state.upstream).await {
        Ok(episodes) => {
            metrics::record_proxy_request("episodes", 200, started);
            (StatusCode::OK, cors_headers(), Json(Value::Array(episodes))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "episodes fetch failed");
            metrics::record_proxy_request("episodes", 500, started);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({ "error": "Failed to fetch episodes" })),
            )
                .into_response()
        }
    }
}

/// Fetch the episode list, passing the body through untouched.
///
/// Transport and decode failures are fatal on either hop; a non-array body
/// silently becomes an empty list.
pub async fn fetch(client: &UpstreamClient) -> Result<Vec<Value>, UpstreamError> {
    let primary = client.primary_url(EPISODES_PATH);
    let body = match client.get_json(&primary).await {
        Ok(body) => body,
        Err(err) if err.is_status() => {
            let fallback = client.fallback_url(EPISODES_PATH);
            tracing::warn!(
                error = %err,
                fallback = %fallback,
                "primary episodes fetch failed, trying fallback"
            );
            client.get_json(&fallback).await?
        }
        Err(err) => return Err(err),
    };

    match body {
        Value::Array(episodes) => Ok(episodes),
        _ => Ok(Vec::new()),
    }
}
