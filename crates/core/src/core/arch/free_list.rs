//! Physical register free list.
//!
//! A FIFO of unallocated physical registers plus a membership bitmap, so that
//! allocation, release and membership queries are all O(1). Registers are
//! handed out oldest-freed first.

use std::collections::VecDeque;

use crate::common::reg::PhysReg;

/// FIFO free list over a fixed physical register file.
#[derive(Clone, Debug)]
pub struct FreeList {
    queue: VecDeque<PhysReg>,
    is_free: Vec<bool>,
}

impl FreeList {
    /// Creates a free list with every one of `count` registers free.
    pub fn new(count: usize) -> Self {
        Self {
            queue: (0..count).map(PhysReg).collect(),
            is_free: vec![true; count],
        }
    }

    /// Total number of physical registers tracked.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.is_free.len()
    }

    /// Number of free registers.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no register is free.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if `reg` is currently free.
    #[inline]
    pub fn contains(&self, reg: PhysReg) -> bool {
        self.is_free.get(reg.idx()).copied().unwrap_or(false)
    }

    /// Takes the oldest free register, or `None` if the list is empty.
    pub fn take(&mut self) -> Option<PhysReg> {
        let reg = self.queue.pop_front()?;
        self.is_free[reg.idx()] = false;
        Some(reg)
    }

    /// Returns `reg` to the list. Returns false if it was already free or is
    /// not part of this register file.
    pub fn release(&mut self, reg: PhysReg) -> bool {
        match self.is_free.get_mut(reg.idx()) {
            Some(slot) if !*slot => {
                *slot = true;
                self.queue.push_back(reg);
                true
            }
            _ => false,
        }
    }

    /// Number of registers whose membership bit says free; equals `len()`
    /// unless the list is corrupt.
    pub(crate) fn bitmap_count(&self) -> usize {
        self.is_free.iter().filter(|f| **f).count()
    }
}
