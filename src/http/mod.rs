//! HTTP surface of the service.
//!
//! # Data Flow
//! ```text
//! browser request
//!     → server.rs (axum setup, request ID, tracing)
//!     → /api/* proxy handlers or / page render
//!     → cors.rs (permissive headers on API responses)
//! ```

pub mod cors;
pub mod server;

pub use server::{AppState, HttpServer};
