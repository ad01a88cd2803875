//! Common utilities and types used throughout the scheduler simulator.
//!
//! This module provides the building blocks shared by every pipeline component:
//! 1. **Register Types:** Strong types for architectural and physical register ids.
//! 2. **Constants:** Architectural register count and configuration minimums.
//! 3. **Error Handling:** Configuration, stream-format and simulation errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration, parsing and simulation.
pub mod error;

/// Architectural and physical register id types.
pub mod reg;

pub use constants::{ARCH_REG_COUNT, MIN_PHYS_REGS};
pub use error::{ConfigError, ParseError, SimError};
pub use reg::{ArchReg, PhysReg};
