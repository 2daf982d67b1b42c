//! Ticket Module
//!
//! Provides the in-memory session ticket cache with sliding TTL
//! expiration and lazy sweeps.

mod cache;
mod order;
mod record;
mod stats;


// Re-export public types
pub use cache::TicketCache;
pub use order::ExpiryOrder;
pub use record::{current_timestamp_ms, TicketRecord};
pub use stats::TicketStats;

// == Public Constants ==
/// Maximum allowed ticket length in bytes
pub const MAX_TICKET_LENGTH: usize = 256;
