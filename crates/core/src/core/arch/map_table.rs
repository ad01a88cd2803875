//! Architectural-to-physical register map table.
//!
//! Holds the current physical mapping of each architectural register. Only
//! the rename stage mutates it; mappings it displaces live on in the
//! `overwritten` field of the renaming instruction until reclaimed.

use crate::common::constants::ARCH_REG_COUNT;
use crate::common::reg::{ArchReg, PhysReg};

/// Current physical mapping per architectural register.
#[derive(Clone, Debug)]
pub struct MapTable {
    map: [PhysReg; ARCH_REG_COUNT],
}

impl Default for MapTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MapTable {
    /// Identity mapping: `r<i>` maps to `p<i>`.
    pub fn new() -> Self {
        Self {
            map: std::array::from_fn(PhysReg),
        }
    }

    /// Current mapping of `reg`.
    #[inline]
    pub const fn get(&self, reg: ArchReg) -> PhysReg {
        self.map[reg.idx()]
    }

    /// Points `reg` at `phys` and returns the mapping it displaced.
    #[inline]
    pub const fn put(&mut self, reg: ArchReg, phys: PhysReg) -> PhysReg {
        std::mem::replace(&mut self.map[reg.idx()], phys)
    }

    /// Iterates over all current mappings in architectural order.
    pub fn iter(&self) -> impl Iterator<Item = (ArchReg, PhysReg)> + '_ {
        self.map.iter().enumerate().map(|(i, p)| (ArchReg(i), *p))
    }
}
