//! Ticket Record Module
//!
//! Defines the per-session ticket record and its expiration deadline.

use std::time::{SystemTime, UNIX_EPOCH};

// == Ticket Record ==
/// A single tracked session ticket with its expiration deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    /// The opaque session ticket
    pub ticket: String,
    /// Expiration timestamp (Unix milliseconds)
    pub expire_at: u64,
}

impl TicketRecord {
    // == Constructor ==
    /// Creates a record whose deadline is `ttl_ms` past `now_ms`.
    ///
    /// # Arguments
    /// * `ticket` - The opaque session ticket
    /// * `now_ms` - Current Unix timestamp in milliseconds
    /// * `ttl_ms` - Sliding lifetime in milliseconds
    pub fn new(ticket: impl Into<String>, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            ticket: ticket.into(),
            expire_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the record has expired at `now_ms`.
    ///
    /// Boundary condition: a record is considered expired once the current
    /// time is greater than or equal to its deadline. A ticket refreshed at
    /// time `t` with lifetime `T` therefore authenticates strictly before
    /// `t + T` and is rejected from `t + T` onward.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expire_at
    }

    // == Refresh ==
    /// Slides the deadline forward to `now_ms + ttl_ms`.
    ///
    /// Callers must only refresh with the same `ttl_ms` the record was
    /// created with; mixing lifetimes breaks the deadline ordering that the
    /// expiry sweep relies on.
    pub fn refresh(&mut self, now_ms: u64, ttl_ms: u64) {
        self.expire_at = now_ms.saturating_add(ttl_ms);
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
