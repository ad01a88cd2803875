//! Timing report.
//!
//! One line per fetched instruction, in fetch order, holding the seven stage
//! cycles `fetch,decode,rename,dispatch,issue,writeback,commit`. A report
//! captured while the simulation is still scheduling is empty, so a run that
//! did not finish leaves an empty file rather than partial timings.

use std::fmt;
use std::io::{self, Write};

use crate::core::SimState;
use crate::isa::instruction::Stage;

/// Stage cycles of every instruction of a finished run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimingReport {
    rows: Vec<[u64; 7]>,
}

impl TimingReport {
    /// An empty report.
    pub const fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Captures the timings of `state`.
    ///
    /// Returns an empty report if the run has not finished, or if any
    /// instruction is missing a stage timestamp.
    pub fn capture(state: &SimState) -> Self {
        if state.is_scheduling() {
            return Self::empty();
        }

        let mut rows = Vec::with_capacity(state.instructions.len());
        for inst in &state.instructions {
            let times = inst.times();
            let mut row = [0u64; 7];
            for (slot, stage) in row.iter_mut().zip(Stage::ALL) {
                let Some(cycle) = times.get(stage) else {
                    return Self::empty();
                };
                *slot = cycle;
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Per-instruction stage cycles in fetch order.
    pub fn rows(&self) -> &[[u64; 7]] {
        &self.rows
    }

    /// Returns true if the report has no lines.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the report to `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let [fetch, decode, rename, dispatch, issue, writeback, commit] = *row;
            writeln!(
                f,
                "{fetch},{decode},{rename},{dispatch},{issue},{writeback},{commit}"
            )?;
        }
        Ok(())
    }
}
