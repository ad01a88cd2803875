//! Out-of-Order Pipeline Structures.
//!
//! This module contains the queues and stages of the scheduler. It provides:
//! 1. **Latches:** Bounded-throughput FIFOs between the in-order front-end stages.
//! 2. **Back-end Queues:** Issue queue, reorder buffer and load/store queue.
//! 3. **Stages:** One function per pipeline stage, driven tail first each cycle.
//! 4. **Input Seam:** The [`traits::InstructionSource`] trait consumed by fetch.

/// Unordered pool of dispatched, not-yet-issued instructions.
pub mod issue_queue;

/// Bounded-throughput latches between in-order stages.
pub mod latches;

/// Program-order load/store queue.
pub mod lsq;

/// Reorder buffer for in-order commit.
pub mod rob;

/// Pipeline stage implementations.
pub mod stages;

/// Instruction stream interface.
pub mod traits;
