//! Issue queue: dispatched instructions waiting for their operands.
//!
//! Membership is unordered as far as correctness goes; entries are kept in
//! dispatch order so the issue scan is deterministic. Issued entries are
//! removed after the scan, never while iterating.

use crate::isa::instruction::InstId;

/// Pool of dispatched, not-yet-issued instructions.
#[derive(Clone, Debug, Default)]
pub struct IssueQueue {
    entries: Vec<InstId>,
}

impl IssueQueue {
    /// Creates an empty issue queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dispatched instruction.
    #[inline]
    pub fn insert(&mut self, id: InstId) {
        self.entries.push(id);
    }

    /// Number of waiting instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of waiting instructions in dispatch order.
    #[inline]
    pub fn as_slice(&self) -> &[InstId] {
        &self.entries
    }

    /// Removes every instruction in `issued`.
    pub fn remove_issued(&mut self, issued: &[InstId]) {
        if !issued.is_empty() {
            self.entries.retain(|id| !issued.contains(id));
        }
    }
}
