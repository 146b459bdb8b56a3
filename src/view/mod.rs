//! Server-rendered list views.
//!
//! # Data Flow
//! ```text
//! GET /?characters_page=N&episodes_page=M&locations_page=K
//!     → page.rs (render shell, join the three sections)
//!     → {characters,episodes,locations}.rs
//!         (fetch via the proxy layer, re-normalize defensively, paginate)
//!     → pagination.rs (page math + control window)
//! ```
//!
//! # Design Decisions
//! - Sections fetch and render independently; one failing section never
//!   blocks its siblings
//! - Each view re-derives identifiers and display names on its own instead
//!   of trusting the proxy normalization
//! - All pagination happens in memory on the fetched array

pub mod characters;
pub mod episodes;
pub mod fallback;
pub mod locations;
pub mod page;
pub mod pagination;
