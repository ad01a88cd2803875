//! Writeback Stage.
//!
//! Every non-memory instruction that is executing completes this cycle.
//! Loads and stores complete only while they are the LSQ head, and at most
//! `width` memory completions happen per cycle (the memory-port budget,
//! separate from the execution-slot budget). Completing marks the destination
//! ready and stamps the writeback cycle.

use tracing::{debug, trace};

use crate::core::SimState;
use crate::isa::instruction::Stage;

/// Executes the writeback stage. Returns true if anything completed.
pub fn writeback_stage(state: &mut SimState) -> bool {
    let cycle = state.cycle;
    let mut progressed = false;
    let mut mem_completions = 0usize;
    let mut port_stalled = false;

    for id in std::mem::take(&mut state.executing) {
        let (is_mem, dst) = {
            let inst = state.inst(id);
            (inst.is_load_store(), inst.phys_dst())
        };

        if is_mem {
            if mem_completions == state.width {
                port_stalled = true;
                state.executing.push(id);
                continue;
            }
            if !state.lsq.can_execute(id) {
                state.executing.push(id);
                continue;
            }
            let removed = state.lsq.remove(id);
            debug_assert!(removed);
            mem_completions += 1;
        }

        if let Some(dst) = dst {
            state.regs.mark_ready(dst);
        }
        let inst = state.inst_mut(id);
        inst.stamp(Stage::Writeback, cycle);
        if is_mem {
            debug!(cycle, inst = %inst, "writeback load/store");
        } else {
            debug!(cycle, inst = %inst, "writeback");
        }
        progressed = true;
    }

    if port_stalled {
        state.stats.stalls_mem_port += 1;
        trace!(cycle, "writeback stalled: memory ports exhausted");
    }
    progressed
}
