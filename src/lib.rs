//! Springfield Hub: a browser-facing content site that aggregates public
//! Simpsons data (characters, episodes, locations) behind a small
//! same-origin proxy layer and renders it as paginated lists.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;
pub mod view;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
