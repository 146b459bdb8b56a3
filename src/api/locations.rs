//! Locations proxy endpoint.
//!
//! Fails open: every failure class — non-success status, transport error,
//! undecodable or non-array body — produces `200 []` so the page can apply
//! its own curated fallback. This endpoint never surfaces an error status.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::http::cors::cors_headers;
use crate::http::AppState;
use crate::observability::metrics;
use crate::upstream::{UpstreamClient, LOCATIONS_PATH};

/// `GET /api/locations`
pub async fn get_locations(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    let locations = fetch(&state.upstream).await;

    metrics::record_proxy_request("locations", 200, started);
    (StatusCode::OK, cors_headers(), Json(Value::Array(locations))).into_response()
}

/// Fetch the location list, mapping every failure to an empty list.
pub async fn fetch(client: &UpstreamClient) -> Vec<Value> {
    let url = client.primary_url(LOCATIONS_PATH);

    match client.get_json(&url).await {
        Ok(Value::Array(locations)) => locations,
        Ok(_) => {
            tracing::warn!("locations response was not an array");
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(error = %err, "locations fetch failed");
            Vec::new()
        }
    }
}
