//! Pipeline latches between the in-order front-end stages.
//!
//! The decode, rename and dispatch latches carry instruction ids in program
//! order. A latch admits at most `width` instructions per cycle through
//! [`PipelineLatch::push_back`]; re-inserting a stalled instruction at the
//! front is not an admission. Capacity is otherwise unbounded.

use std::collections::VecDeque;

use crate::isa::instruction::InstId;

/// Program-ordered FIFO with a per-cycle admission limit.
#[derive(Clone, Debug)]
pub struct PipelineLatch {
    entries: VecDeque<InstId>,
    width: usize,
    admitted: usize,
}

impl PipelineLatch {
    /// Creates an empty latch admitting `width` instructions per cycle.
    pub fn new(width: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            width,
            admitted: 0,
        }
    }

    /// Resets the per-cycle admission count.
    #[inline]
    pub const fn begin_cycle(&mut self) {
        self.admitted = 0;
    }

    /// Instructions admitted so far this cycle.
    #[inline]
    pub const fn admitted(&self) -> usize {
        self.admitted
    }

    /// Returns true if another instruction may be admitted this cycle.
    #[inline]
    pub const fn has_room(&self) -> bool {
        self.admitted < self.width
    }

    /// Appends `id` behind all older instructions.
    ///
    /// Returns false, leaving the latch unchanged, once `width` instructions
    /// have already been admitted this cycle.
    pub fn push_back(&mut self, id: InstId) -> bool {
        if !self.has_room() {
            return false;
        }
        self.entries.push_back(id);
        self.admitted += 1;
        true
    }

    /// Re-inserts a stalled instruction ahead of everything else.
    #[inline]
    pub fn push_front(&mut self, id: InstId) {
        self.entries.push_front(id);
    }

    /// Removes the oldest instruction.
    #[inline]
    pub fn pop_front(&mut self) -> Option<InstId> {
        self.entries.pop_front()
    }

    /// The oldest instruction, if any.
    #[inline]
    pub fn front(&self) -> Option<InstId> {
        self.entries.front().copied()
    }

    /// Returns true if the latch holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of instructions held.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over held instructions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = InstId> + '_ {
        self.entries.iter().copied()
    }
}
