//! Architectural and Physical register types.
//!
//! This module defines strong types for the two register name spaces so a
//! rename table lookup can never be fed the wrong kind of index:
//! 1. **Type Safety:** Distinguishes architectural names from renaming targets at compile time.
//! 2. **Indexing:** Exposes the raw index for table lookups.
//! 3. **Display:** Renders `r<n>` / `p<n>` for log events and disassembly.

use std::fmt;

use super::constants::ARCH_REG_COUNT;

/// An architectural register name (`r0`..`r31`).
///
/// Built through [`ArchReg::new`] outside this crate, so every value is a
/// valid map-table index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchReg(pub(crate) usize);

/// A physical register id, a renaming target in the physical register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysReg(pub usize);

impl ArchReg {
    /// Creates an architectural register id, or `None` if `idx` is not a
    /// valid architectural register.
    #[inline]
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < ARCH_REG_COUNT {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Returns the raw register index.
    #[inline]
    pub const fn idx(self) -> usize {
        self.0
    }
}

impl PhysReg {
    /// Returns the raw register index.
    #[inline]
    pub const fn idx(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArchReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl fmt::Display for PhysReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}
