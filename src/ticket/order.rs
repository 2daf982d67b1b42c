//! Expiry Order Module
//!
//! Keeps ticket records in refresh order so the record closest to expiring
//! is always at the front.
//!
//! Records live in a slab-style arena and are chained with explicit
//! `prev`/`next` slot indices instead of pointers. Callers hold slot
//! indices, which stay stable for as long as the record is present, and
//! every reordering operation is O(1):
//! - Front = least recently refreshed (earliest deadline)
//! - Back = most recently refreshed (latest deadline)

use crate::ticket::TicketRecord;

// == Expiry Order ==
/// Doubly-linked sequence of ticket records backed by a reusable arena.
#[derive(Debug, Default)]
pub struct ExpiryOrder {
    /// Arena of linked nodes; emptied slots are recycled
    nodes: Vec<Node>,
    /// Slots available for reuse
    free: Vec<usize>,
    /// Front of the sequence, None when empty
    head: Option<usize>,
    /// Back of the sequence, None when empty
    tail: Option<usize>,
    /// Number of live records
    len: usize,
}

/// One arena slot. A freed slot keeps no record and is never linked.
#[derive(Debug)]
struct Node {
    record: Option<TicketRecord>,
    prev: Option<usize>,
    next: Option<usize>,
}

impl ExpiryOrder {
    // == Constructor ==
    /// Creates a new empty order.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Back ==
    /// Appends a record as the most recently refreshed.
    ///
    /// Returns the slot index the record now occupies; the index stays
    /// valid until the record is popped off the front.
    pub fn push_back(&mut self, record: TicketRecord) -> usize {
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot].record = Some(record);
                slot
            }
            None => {
                self.nodes.push(Node {
                    record: Some(record),
                    prev: None,
                    next: None,
                });
                self.nodes.len() - 1
            }
        };
        self.link_back(slot);
        self.len += 1;
        slot
    }

    // == Move To Back ==
    /// Re-links an existing record as the most recently refreshed.
    ///
    /// Freed or out-of-range slots are ignored.
    pub fn move_to_back(&mut self, slot: usize) {
        if self.get(slot).is_none() || self.tail == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.link_back(slot);
    }

    // == Front ==
    /// Returns the least recently refreshed record without removing it.
    pub fn front(&self) -> Option<&TicketRecord> {
        self.head.and_then(|slot| self.nodes[slot].record.as_ref())
    }

    // == Pop Front ==
    /// Removes and returns the least recently refreshed record.
    ///
    /// The vacated slot becomes eligible for reuse by a later `push_back`.
    pub fn pop_front(&mut self) -> Option<TicketRecord> {
        let slot = self.head?;
        self.unlink(slot);
        self.free.push(slot);
        self.len -= 1;
        self.nodes[slot].record.take()
    }

    // == Get ==
    /// Returns the record at `slot`, if the slot is live.
    pub fn get(&self, slot: usize) -> Option<&TicketRecord> {
        self.nodes.get(slot).and_then(|node| node.record.as_ref())
    }

    /// Returns mutable access to the record at `slot`, if the slot is live.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut TicketRecord> {
        self.nodes.get_mut(slot).and_then(|node| node.record.as_mut())
    }

    // == Length ==
    /// Returns the number of live records.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates records front-to-back (earliest deadline first).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Links an unlinked slot at the back of the sequence.
    fn link_back(&mut self, slot: usize) {
        self.nodes[slot].prev = self.tail;
        self.nodes[slot].next = None;
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Detaches a linked slot, stitching its neighbors together.
    fn unlink(&mut self, slot: usize) {
        let prev = self.nodes[slot].prev;
        let next = self.nodes[slot].next;
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[slot].prev = None;
        self.nodes[slot].next = None;
    }
}

// == Iterator ==
/// Front-to-back iterator over live records.
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TicketRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.nodes[slot];
        self.cursor = node.next;
        node.record.as_ref()
    }
}
