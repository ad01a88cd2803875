//! Simulation driver and trace I/O.
//!
//! This module connects the pipeline model to its inputs and outputs:
//! 1. **Loader:** Parses the text trace (header plus one instruction per line).
//! 2. **Simulator:** Runs the per-cycle stage sequence and detects deadlock.
//! 3. **Report:** Renders per-instruction stage timestamps.

/// Text trace parsing.
pub mod loader;

/// Per-instruction timing report.
pub mod report;

/// Cycle driver.
pub mod simulator;
