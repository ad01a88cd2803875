//! Scheduler core.
//!
//! This module groups the machine model driven by the simulator:
//! 1. **Architectural State:** Map table, free list and ready table.
//! 2. **Pipeline:** Latches, issue queue, ROB, LSQ and the stage functions.
//! 3. **State:** The single owned [`SimState`] every stage operates on.

/// Register renaming state (map table, free list, ready table).
pub mod arch;

/// Pipeline queues and stages.
pub mod pipeline;

/// Owned simulation state.
pub mod state;

pub use state::SimState;
