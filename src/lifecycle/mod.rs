//! Process lifecycle.
//!
//! # Design Decisions
//! - One broadcast channel fans the shutdown signal out to every
//!   long-running task
//! - Ctrl+C is the only trigger in production; tests trigger directly

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
