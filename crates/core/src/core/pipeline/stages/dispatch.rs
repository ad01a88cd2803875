//! Dispatch Stage.
//!
//! Drains the dispatch latch. Every instruction enters the issue queue and the
//! ROB tail; loads and stores also enter the LSQ tail. A destination register
//! is marked not ready until the instruction writes back.

use tracing::debug;

use crate::core::SimState;
use crate::isa::instruction::Stage;

/// Executes the dispatch stage. Returns true if anything was dispatched.
pub fn dispatch_stage(state: &mut SimState) -> bool {
    let cycle = state.cycle;
    let mut progressed = false;

    while let Some(id) = state.dispatch_queue.pop_front() {
        let (is_mem, dst) = {
            let inst = state.inst(id);
            (inst.is_load_store(), inst.phys_dst())
        };

        state.issue_queue.insert(id);
        state.rob.allocate(id);
        if is_mem {
            state.lsq.allocate(id);
        }
        if let Some(dst) = dst {
            state.regs.mark_not_ready(dst);
        }

        let inst = state.inst_mut(id);
        inst.stamp(Stage::Dispatch, cycle);
        debug!(cycle, inst = %inst, "dispatched");
        progressed = true;
    }

    state.note_occupancy();
    progressed
}
