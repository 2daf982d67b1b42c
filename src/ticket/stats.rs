//! Ticket Statistics Module
//!
//! Tracks counters for cache activity monitoring:
//! - Add outcomes (accepted vs. duplicate)
//! - Auth outcomes (hit, miss, expired)
//! - Records removed by expiry sweeps
//! - Current number of live tickets

use serde::Serialize;

// == Ticket Stats ==
/// Counters describing cache activity since startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketStats {
    /// Tickets accepted by add
    pub added: u64,
    /// Adds rejected because the ticket already existed
    pub duplicates: u64,
    /// Auths that found a live ticket
    pub hits: u64,
    /// Auths for tickets that were never added or already swept
    pub misses: u64,
    /// Auths that found the ticket past its deadline
    pub expirations: u64,
    /// Records removed by expiry sweeps
    pub swept: u64,
    /// Live tickets currently in the cache
    pub active: usize,
}

impl TicketStats {
    /// Creates a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a ticket accepted by add.
    pub fn record_add(&mut self) {
        self.added += 1;
    }

    /// Records an add rejected as a duplicate.
    pub fn record_duplicate(&mut self) {
        self.duplicates += 1;
    }

    /// Records a successful authentication.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Records an authentication against an unknown ticket.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Records an authentication against an expired ticket.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Records `count` tickets removed by an expiry sweep.
    pub fn record_swept(&mut self, count: u64) {
        self.swept += count;
    }

    /// Updates the live ticket count.
    pub fn set_active(&mut self, active: usize) {
        self.active = active;
    }

    /// Fraction of auth attempts that succeeded.
    ///
    /// Returns 0.0 when no authentication has been attempted yet.
    pub fn auth_rate(&self) -> f64 {
        let attempts = self.hits + self.misses + self.expirations;
        if attempts == 0 {
            return 0.0;
        }
        self.hits as f64 / attempts as f64
    }
}
