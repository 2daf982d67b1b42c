//! Ticket Cache Module
//!
//! The authoritative in-process registry of valid session tickets:
//! - O(1) add and authenticate via a ticket index
//! - Sliding expiration: every successful auth re-arms the deadline
//! - Lazy front-to-back sweeps piggybacked on add/auth
//!
//! The cache maintains two invariants at all times:
//! 1. `index` and `order` track exactly the same tickets (bijection).
//! 2. `order` is sorted ascending by deadline. Every insert and refresh
//!    stamps `now + TTL` and moves the record to the back, so with a
//!    non-decreasing clock the front always holds the earliest deadline.
//!
//! Invariant 2 is what makes sweeping cheap: a sweep walks from the
//! front and stops at the first live record, never inspecting the rest.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, TicketError};
use crate::ticket::order::ExpiryOrder;
use crate::ticket::record::{current_timestamp_ms, TicketRecord};
use crate::ticket::stats::TicketStats;

// == Ticket Cache ==
/// In-memory session ticket cache with sliding TTL expiration.
#[derive(Debug)]
pub struct TicketCache {
    /// Ticket string to its slot in `order`
    index: HashMap<String, usize>,
    /// Records chained from earliest deadline (front) to latest (back)
    order: ExpiryOrder,
    /// Activity counters
    stats: TicketStats,
    /// Lifetime granted on add and re-armed on each successful auth
    ttl_ms: u64,
}

impl TicketCache {
    // == Constructor ==
    /// Creates a new empty cache.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime granted to each ticket on add and on every
    ///   successful authentication. Fixed for the life of the cache.
    pub fn new(ttl: Duration) -> Self {
        Self {
            index: HashMap::new(),
            order: ExpiryOrder::new(),
            stats: TicketStats::new(),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    // == Add Operation ==
    /// Registers a newly issued ticket.
    ///
    /// Fails with `TicketError::AlreadyExists` if the ticket is still
    /// tracked, whether or not its deadline has passed; a duplicate add
    /// never refreshes the existing record. On success the ticket gets
    /// a deadline of now + TTL and an expiry sweep runs.
    pub fn add(&mut self, ticket: impl Into<String>) -> Result<()> {
        let now_ms = current_timestamp_ms();
        self.add_at(ticket, now_ms)
    }

    /// Add with an explicit clock, for deterministic tests.
    pub(crate) fn add_at(&mut self, ticket: impl Into<String>, now_ms: u64) -> Result<()> {
        let ticket = ticket.into();

        if self.index.contains_key(&ticket) {
            warn!("ticket \"{}\" already exists", ticket);
            self.stats.record_duplicate();
            return Err(TicketError::AlreadyExists(ticket));
        }

        let record = TicketRecord::new(ticket.clone(), now_ms, self.ttl_ms);
        let slot = self.order.push_back(record);
        self.index.insert(ticket, slot);
        self.stats.record_add();

        self.sweep_at(now_ms);
        Ok(())
    }

    // == Auth Operation ==
    /// Authenticates a session ticket, re-arming its deadline on success.
    ///
    /// Outcomes:
    /// - Unknown ticket: `TicketError::NotFound`
    /// - Known but past its deadline: `TicketError::Expired`; the record
    ///   is removed by the sweep that follows
    /// - Live ticket: deadline reset to now + TTL and the record moved
    ///   to the back of the order
    ///
    /// Every outcome finishes with an expiry sweep.
    pub fn auth(&mut self, ticket: &str) -> Result<()> {
        let now_ms = current_timestamp_ms();
        self.auth_at(ticket, now_ms)
    }

    /// Auth with an explicit clock, for deterministic tests.
    pub(crate) fn auth_at(&mut self, ticket: &str, now_ms: u64) -> Result<()> {
        let slot = match self.index.get(ticket) {
            Some(&slot) => slot,
            None => {
                warn!("ticket \"{}\" not found", ticket);
                self.stats.record_miss();
                self.sweep_at(now_ms);
                return Err(TicketError::NotFound(ticket.to_string()));
            }
        };

        let expired = self.order.get(slot).map_or(true, |r| r.is_expired(now_ms));
        if expired {
            warn!("ticket \"{}\" expired", ticket);
            self.stats.record_expiration();
            // Ascending deadlines put this record inside the expired
            // prefix, so the sweep is guaranteed to remove it.
            self.sweep_at(now_ms);
            return Err(TicketError::Expired(ticket.to_string()));
        }

        if let Some(record) = self.order.get_mut(slot) {
            record.refresh(now_ms, self.ttl_ms);
        }
        self.order.move_to_back(slot);
        self.stats.record_hit();

        self.sweep_at(now_ms);
        Ok(())
    }

    // == Sweep Operation ==
    /// Removes every record whose deadline has passed.
    ///
    /// Walks from the front of the order and stops at the first live
    /// record. Returns the number of records removed.
    pub(crate) fn sweep_at(&mut self, now_ms: u64) -> usize {
        let mut removed = 0;
        while let Some(front) = self.order.front() {
            if !front.is_expired(now_ms) {
                break;
            }
            if let Some(record) = self.order.pop_front() {
                self.index.remove(&record.ticket);
                debug!("swept expired ticket \"{}\"", record.ticket);
                removed += 1;
            }
        }
        if removed > 0 {
            self.stats.record_swept(removed as u64);
        }
        self.stats.set_active(self.index.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> TicketStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the number of tickets currently tracked.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
impl TicketCache {
    /// Asserts the bijection and ascending-deadline invariants.
    pub(crate) fn check_invariants(&self) {
        assert_eq!(
            self.index.len(),
            self.order.len(),
            "index and order must track the same number of tickets"
        );
        for (ticket, &slot) in &self.index {
            let record = self
                .order
                .get(slot)
                .expect("every indexed slot must hold a live record");
            assert_eq!(&record.ticket, ticket, "index slot must match its ticket");
        }
        let mut previous = 0u64;
        for record in self.order.iter() {
            assert!(
                record.expire_at >= previous,
                "deadlines must be ascending front to back"
            );
            previous = record.expire_at;
        }
    }
}
