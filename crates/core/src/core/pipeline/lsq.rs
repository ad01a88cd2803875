//! Load/Store Queue (LSQ).
//!
//! Holds every dispatched load and store in program order until its memory
//! access completes. Instructions carry no addresses, so the queue cannot
//! tell whether two accesses overlap; memory operations therefore execute
//! strictly in order: only the oldest resident entry may issue or complete.

use std::collections::VecDeque;

use crate::isa::instruction::InstId;

/// Program-order FIFO of in-flight memory instructions.
#[derive(Clone, Debug, Default)]
pub struct LoadStoreQueue {
    entries: VecDeque<InstId>,
}

impl LoadStoreQueue {
    /// Creates an empty LSQ.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatched memory instruction at the tail.
    #[inline]
    pub fn allocate(&mut self, id: InstId) {
        self.entries.push_back(id);
    }

    /// The oldest resident memory instruction.
    #[inline]
    pub fn head(&self) -> Option<InstId> {
        self.entries.front().copied()
    }

    /// Returns true if `id` may access memory now: it is the oldest entry.
    #[inline]
    pub fn can_execute(&self, id: InstId) -> bool {
        self.head() == Some(id)
    }

    /// Removes `id` once its access has completed. Returns false if `id` is
    /// not resident.
    pub fn remove(&mut self, id: InstId) -> bool {
        match self.entries.iter().position(|e| *e == id) {
            Some(pos) => self.entries.remove(pos).is_some(),
            None => false,
        }
    }

    /// Number of resident memory instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no memory instruction is in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
