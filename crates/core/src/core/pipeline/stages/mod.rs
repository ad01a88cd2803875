//! Pipeline stage implementations.
//!
//! Each stage is a free function over the shared [`SimState`](crate::core::SimState)
//! that reports whether it made progress this cycle. The driver calls them
//! tail stage first so a stage can forward work into a latch its consumer
//! already drained in the same cycle:
//! 1. **Reclaim:** Frees registers displaced by instructions committed last cycle.
//! 2. **Commit:** Retires the written-back prefix of the ROB.
//! 3. **Writeback:** Completes executing instructions, memory ops in LSQ order.
//! 4. **Issue:** Selects ready instructions out of order into free execution slots.
//! 5. **Dispatch:** Moves renamed instructions into the issue queue, ROB and LSQ.
//! 6. **Rename:** Maps operands to physical registers, stalling in order when none is free.
//! 7. **Decode:** Moves fetched instructions to the rename latch.
//! 8. **Fetch:** Pulls up to `width` instructions from the stream.

/// Commit stage implementation.
pub mod commit;

/// Decode stage implementation.
pub mod decode;

/// Dispatch stage implementation.
pub mod dispatch;

/// Fetch stage implementation.
pub mod fetch;

/// Issue stage implementation.
pub mod issue;

/// Deferred register reclamation.
pub mod reclaim;

/// Rename stage implementation.
pub mod rename;

/// Writeback stage implementation.
pub mod writeback;

/// Commit stage entry point.
pub use commit::commit_stage;
/// Decode stage entry point.
pub use decode::decode_stage;
/// Dispatch stage entry point.
pub use dispatch::dispatch_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Issue stage entry point.
pub use issue::issue_stage;
/// Register reclamation entry point.
pub use reclaim::reclaim_stage;
/// Rename stage entry point.
pub use rename::rename_stage;
/// Writeback stage entry point.
pub use writeback::writeback_stage;
