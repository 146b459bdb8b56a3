//! Same-origin proxy endpoints.
//!
//! # Data Flow
//! ```text
//! browser GET /api/{characters|episodes|locations}
//!     → handler (one upstream fetch; episodes may add a fallback hop)
//!     → shape check ("is it a JSON array")
//!     → characters.rs normalization (characters only)
//!     → JSON array + permissive CORS headers
//! ```
//!
//! # Design Decisions
//! - Endpoints are stateless; each request maps to at most two upstream calls
//! - Failure policy differs per endpoint: characters fail closed (500),
//!   locations fail open (200 + empty array), episodes sit in between
//! - No caching or revalidation; every browser request reaches the provider

pub mod characters;
pub mod episodes;
pub mod locations;

use axum::routing::get;
use axum::Router;

use crate::http::cors::preflight;
use crate::http::AppState;
use crate::upstream::UpstreamError;

/// Failure of a proxy fetch, shared by the HTTP handlers and the page views.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("upstream body was not a JSON array")]
    NotAnArray,
}

/// Router for the `/api` surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/characters",
            get(characters::get_characters).options(preflight),
        )
        .route(
            "/api/episodes",
            get(episodes::get_episodes).options(preflight),
        )
        .route(
            "/api/locations",
            get(locations::get_locations).options(preflight),
        )
}
