//! Physical register readiness table.
//!
//! One bit per physical register: set once the value held by an allocated
//! register has been computed. The register file clears the bit whenever a
//! register is freed.

use crate::common::reg::PhysReg;

/// Ready bit per physical register.
#[derive(Clone, Debug)]
pub struct ReadyTable {
    ready: Vec<bool>,
}

impl ReadyTable {
    /// Creates a table of `count` registers, none ready.
    pub fn new(count: usize) -> Self {
        Self {
            ready: vec![false; count],
        }
    }

    /// Returns true if `reg` holds a computed value.
    #[inline]
    pub fn is_ready(&self, reg: PhysReg) -> bool {
        self.ready.get(reg.idx()).copied().unwrap_or(false)
    }

    /// Marks `reg` as holding a computed value.
    #[inline]
    pub fn set(&mut self, reg: PhysReg) {
        if let Some(bit) = self.ready.get_mut(reg.idx()) {
            *bit = true;
        }
    }

    /// Marks `reg` as awaiting its value.
    #[inline]
    pub fn clear(&mut self, reg: PhysReg) {
        if let Some(bit) = self.ready.get_mut(reg.idx()) {
            *bit = false;
        }
    }

    /// Iterates over the registers currently marked ready.
    pub fn iter_ready(&self) -> impl Iterator<Item = PhysReg> + '_ {
        self.ready
            .iter()
            .enumerate()
            .filter(|(_, r)| **r)
            .map(|(i, _)| PhysReg(i))
    }
}
