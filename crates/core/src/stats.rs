//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for a scheduling run. It provides:
//! 1. **Cycle and IPC:** Total cycles, fetched and committed instructions, derived IPC/CPI.
//! 2. **Stalls:** Per-cause stall counts for rename, issue and memory completion.
//! 3. **Occupancy:** Peak occupancy of the ROB, issue queue and load/store queue.

use std::fmt;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulated cycles.
    pub cycles: u64,
    /// Instructions pulled from the stream.
    pub fetched: u64,
    /// Instructions retired.
    pub committed: u64,

    /// Cycles in which rename stalled for lack of a free physical register.
    pub stalls_free_list: u64,
    /// Cycles in which rename stalled because the dispatch latch admitted its
    /// full width.
    pub stalls_dispatch_latch: u64,
    /// Cycles in which a ready instruction was left behind for lack of an
    /// execution slot.
    pub stalls_issue_slots: u64,
    /// Cycles in which a memory completion waited for a memory port.
    pub stalls_mem_port: u64,
    /// Ready memory instructions held back because an older memory
    /// instruction was still resident in the LSQ (summed over cycles).
    pub lsq_order_holds: u64,

    /// Peak reorder buffer occupancy.
    pub peak_rob: usize,
    /// Peak issue queue occupancy.
    pub peak_issue_queue: usize,
    /// Peak load/store queue occupancy.
    pub peak_lsq: usize,
}

impl SimStats {
    /// Committed instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.committed as f64 / self.cycles as f64
        }
    }

    /// Cycles per committed instruction.
    pub fn cpi(&self) -> f64 {
        if self.committed == 0 {
            0.0
        } else {
            self.cycles as f64 / self.committed as f64
        }
    }

    /// Prints the statistics block to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "SCHEDULER STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "cycles                   {}", self.cycles)?;
        writeln!(f, "instructions.fetched     {}", self.fetched)?;
        writeln!(f, "instructions.committed   {}", self.committed)?;
        writeln!(f, "ipc                      {:.4}", self.ipc())?;
        writeln!(f, "cpi                      {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "stalls.free_list         {}", self.stalls_free_list)?;
        writeln!(f, "stalls.dispatch_latch    {}", self.stalls_dispatch_latch)?;
        writeln!(f, "stalls.issue_slots       {}", self.stalls_issue_slots)?;
        writeln!(f, "stalls.mem_port          {}", self.stalls_mem_port)?;
        writeln!(f, "lsq.order_holds          {}", self.lsq_order_holds)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "peak.rob                 {}", self.peak_rob)?;
        writeln!(f, "peak.issue_queue         {}", self.peak_issue_queue)?;
        write!(f, "peak.lsq                 {}", self.peak_lsq)
    }
}
