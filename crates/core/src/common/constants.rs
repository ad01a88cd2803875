//! Global System Constants.
//!
//! This module defines the fixed machine parameters the scheduler models:
//! 1. **Architectural State:** Number of register names visible to the instruction stream.
//! 2. **Configuration Limits:** Minimum accepted physical register count.

/// Number of architectural registers visible to the instruction stream.
pub const ARCH_REG_COUNT: usize = 32;

/// Minimum number of physical registers a configuration may declare.
///
/// Every architectural register needs a physical home at reset, so the
/// physical file can never be smaller than the architectural one.
pub const MIN_PHYS_REGS: usize = ARCH_REG_COUNT;
