//! Register renaming state.
//!
//! This module bundles the three structures that track physical registers:
//! 1. **Map Table:** Current architectural-to-physical mapping.
//! 2. **Free List:** Unallocated physical registers, reclaimed after commit.
//! 3. **Ready Table:** Which allocated registers hold a computed value.
//!
//! All operations are O(1). Running out of free registers is a stall, not an
//! error: [`RegisterFile::allocate`] simply returns `None`.

/// FIFO free list of physical registers.
pub mod free_list;

/// Architectural-to-physical map table.
pub mod map_table;

/// Ready bits for physical registers.
pub mod ready_table;

use thiserror::Error;

use crate::common::constants::ARCH_REG_COUNT;
use crate::common::reg::{ArchReg, PhysReg};

pub use free_list::FreeList;
pub use map_table::MapTable;
pub use ready_table::ReadyTable;

/// A broken register-file invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Two architectural registers map to the same physical register.
    #[error("{first} and {second} both map to {phys}")]
    SharedMapping {
        /// First architectural register holding the mapping.
        first: ArchReg,
        /// Second architectural register holding the mapping.
        second: ArchReg,
        /// The shared physical register.
        phys: PhysReg,
    },

    /// A live mapping points at a free register.
    #[error("{arch} maps to free register {phys}")]
    MappedButFree {
        /// The architectural register.
        arch: ArchReg,
        /// Its free physical mapping.
        phys: PhysReg,
    },

    /// A free register is marked ready.
    #[error("free register {0} is marked ready")]
    ReadyButFree(PhysReg),

    /// Allocated and free registers do not add up to the file size.
    #[error("{allocated} allocated + {free} free != {total} physical registers")]
    Conservation {
        /// Registers not on the free list.
        allocated: usize,
        /// Registers on the free list.
        free: usize,
        /// Configured file size.
        total: usize,
    },
}

/// Map table, free list and ready table for one physical register file.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    map: MapTable,
    free: FreeList,
    ready: ReadyTable,
}

impl RegisterFile {
    /// Creates a register file of `phys_regs` registers with `r<i>` mapped
    /// to `p<i>` and every mapped register ready.
    ///
    /// `phys_regs` must be at least [`ARCH_REG_COUNT`]; configuration
    /// validation guarantees this before a register file is built.
    pub fn new(phys_regs: usize) -> Self {
        debug_assert!(phys_regs >= ARCH_REG_COUNT);
        let mut free = FreeList::new(phys_regs);
        let mut ready = ReadyTable::new(phys_regs);
        // The identity reset mapping owns the first ARCH_REG_COUNT registers.
        for _ in 0..ARCH_REG_COUNT {
            if let Some(reg) = free.take() {
                ready.set(reg);
            }
        }
        Self {
            map: MapTable::new(),
            free,
            ready,
        }
    }

    /// Total number of physical registers.
    #[inline]
    pub fn phys_count(&self) -> usize {
        self.free.capacity()
    }

    /// Number of registers on the free list.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Number of allocated registers.
    #[inline]
    pub fn allocated_count(&self) -> usize {
        self.phys_count() - self.free_count()
    }

    /// Returns true if `reg` is on the free list.
    #[inline]
    pub fn is_free(&self, reg: PhysReg) -> bool {
        self.free.contains(reg)
    }

    /// Takes a register off the free list, or `None` if none is free.
    #[inline]
    pub fn allocate(&mut self) -> Option<PhysReg> {
        self.free.take()
    }

    /// Returns `reg` to the free list and clears its ready bit.
    ///
    /// Returns false if `reg` was already free.
    pub fn free(&mut self, reg: PhysReg) -> bool {
        self.ready.clear(reg);
        self.free.release(reg)
    }

    /// Marks `reg` as awaiting its value.
    #[inline]
    pub fn mark_not_ready(&mut self, reg: PhysReg) {
        self.ready.clear(reg);
    }

    /// Marks `reg` as holding a computed value. Ignored for free registers.
    #[inline]
    pub fn mark_ready(&mut self, reg: PhysReg) {
        debug_assert!(!self.free.contains(reg), "{reg} marked ready while free");
        if !self.free.contains(reg) {
            self.ready.set(reg);
        }
    }

    /// Returns true if `reg` holds a computed value.
    #[inline]
    pub fn is_ready(&self, reg: PhysReg) -> bool {
        self.ready.is_ready(reg)
    }

    /// Current mapping of `reg`.
    #[inline]
    pub const fn current_mapping(&self, reg: ArchReg) -> PhysReg {
        self.map.get(reg)
    }

    /// Points `reg` at `phys` and returns the displaced mapping.
    #[inline]
    pub const fn remap(&mut self, reg: ArchReg, phys: PhysReg) -> PhysReg {
        self.map.put(reg, phys)
    }

    /// The map table.
    #[inline]
    pub const fn map_table(&self) -> &MapTable {
        &self.map
    }

    /// Verifies the register-file invariants, returning the first violation.
    ///
    /// Checked: live mappings are unique and allocated, free registers are
    /// never ready, and allocated plus free registers equal the file size.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let total = self.phys_count();
        let mut owner: Vec<Option<ArchReg>> = vec![None; total];
        for (arch, phys) in self.map.iter() {
            if self.free.contains(phys) {
                return Err(InvariantViolation::MappedButFree { arch, phys });
            }
            if let Some(slot) = owner.get_mut(phys.idx()) {
                if let Some(first) = *slot {
                    return Err(InvariantViolation::SharedMapping {
                        first,
                        second: arch,
                        phys,
                    });
                }
                *slot = Some(arch);
            }
        }

        if let Some(reg) = self.ready.iter_ready().find(|r| self.free.contains(*r)) {
            return Err(InvariantViolation::ReadyButFree(reg));
        }

        let free = self.free.len();
        let allocated = total - self.free.bitmap_count();
        if allocated + free != total {
            return Err(InvariantViolation::Conservation {
                allocated,
                free,
                total,
            });
        }
        Ok(())
    }
}
