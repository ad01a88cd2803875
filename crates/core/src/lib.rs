//! Out-of-order scheduler simulator library.
//!
//! This crate implements a cycle-accurate model of an out-of-order pipeline
//! with register renaming:
//! 1. **Core:** Fetch, decode, rename, dispatch, issue, writeback, commit and register reclamation.
//! 2. **Renaming:** Map table, FIFO free list and ready table over a configurable physical file.
//! 3. **ISA:** Register, immediate, load and store instruction records with per-stage timestamps.
//! 4. **Simulation:** Trace loader, cycle driver with deadlock detection, and the timing report.
//! 5. **Statistics:** Stall, occupancy and throughput counters.
//!
//! # Examples
//!
//! ```
//! use ooosim_core::{Simulator, TraceReader};
//! use ooosim_core::config::GeneralConfig;
//!
//! let trace = "33,1\nR,1,2,3\n";
//! let reader = TraceReader::new(trace.as_bytes()).unwrap();
//! let mut sim = Simulator::from_trace(reader, GeneralConfig::default()).unwrap();
//! sim.run().unwrap();
//!
//! assert_eq!(sim.report().to_string(), "0,1,2,3,4,5,6\n");
//! ```

/// Common types and constants (registers, errors).
pub mod common;
/// Simulator configuration (defaults, general and pipeline settings).
pub mod config;
/// Scheduler core (renaming state, pipeline queues and stages).
pub mod core;
/// Instruction records, operand kinds and stage timestamps.
pub mod isa;
/// Trace loader, cycle driver and timing report.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Simulation error type; distinguishes input errors from model failures.
pub use crate::common::error::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Owned simulation state; inspect it through [`Simulator::state`].
pub use crate::core::SimState;
/// Seam between the fetch stage and whatever produces instructions.
pub use crate::core::pipeline::traits::InstructionSource;
/// Per-instruction timing report.
pub use crate::sim::report::TimingReport;
/// Text trace reader.
pub use crate::sim::loader::TraceReader;
/// Cycle driver.
pub use crate::sim::simulator::Simulator;
