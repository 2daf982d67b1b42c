//! Comet Ticket - In-memory session ticket authentication cache
//!
//! Validates, refreshes, and expires session tickets on the hot path of
//! every client connect and subscribe.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ticket;

pub use api::AppState;
pub use config::Config;
