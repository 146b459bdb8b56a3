//! Upstream provider access.
//!
//! # Data Flow
//! ```text
//! proxy handler
//!     → client.rs (GET base + path, classify the outcome)
//!     → serde_json::Value (shape checked by each endpoint)
//! ```
//!
//! # Design Decisions
//! - Outcomes split into status / transport / decode failures so the
//!   episodes endpoint can key its fallback hop on status alone
//! - No request timeout is configured; a hung provider hangs the caller
//! - Responses are untyped JSON; neither provider honors a schema

pub mod client;

pub use client::{UpstreamClient, UpstreamError};

/// Characters endpoint on the primary provider.
pub const CHARACTERS_PATH: &str = "/characters";

/// Episodes endpoint, shared by the primary and fallback providers.
pub const EPISODES_PATH: &str = "/episodes";

/// Locations endpoint on the primary provider.
pub const LOCATIONS_PATH: &str = "/locations";
