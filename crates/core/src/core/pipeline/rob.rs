//! Reorder Buffer (ROB) for in-order commit.
//!
//! The ROB tracks every dispatched, uncommitted instruction in program order.
//! It provides:
//! 1. **Allocation:** Appends instructions at dispatch, preserving program order.
//! 2. **In-order Commit:** Retires instructions only from the head.
//!
//! Completion is recorded on the instruction itself (its writeback stamp),
//! so the ROB only holds ids.

use std::collections::VecDeque;

use crate::isa::instruction::InstId;

/// Reorder Buffer — program-order FIFO of in-flight instructions.
#[derive(Clone, Debug, Default)]
pub struct Rob {
    entries: VecDeque<InstId>,
}

impl Rob {
    /// Creates an empty ROB.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of occupied entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ROB is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a newly dispatched instruction at the tail.
    ///
    /// Dispatch is in program order, so the tail is always the youngest entry.
    pub fn allocate(&mut self, id: InstId) {
        debug_assert!(self.entries.back().is_none_or(|tail| *tail < id));
        self.entries.push_back(id);
    }

    /// Returns the oldest entry, if the ROB is non-empty.
    #[inline]
    pub fn peek_head(&self) -> Option<InstId> {
        self.entries.front().copied()
    }

    /// Retires the head entry if `is_done` says it has written back.
    ///
    /// Returns `None` if the ROB is empty or the head is still in flight.
    pub fn commit_head(&mut self, is_done: impl FnOnce(InstId) -> bool) -> Option<InstId> {
        let head = self.peek_head()?;
        if !is_done(head) {
            return None;
        }
        self.entries.pop_front()
    }

    /// Iterates over entries from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = InstId> + '_ {
        self.entries.iter().copied()
    }
}
