//! Commit Stage: retire instructions from the ROB head.
//!
//! Retires the longest prefix of the ROB whose entries have written back and
//! stops at the first one that has not. Retired instructions are queued for
//! register reclamation at the start of the next cycle.

use tracing::debug;

use crate::core::SimState;
use crate::isa::instruction::Stage;

/// Executes the commit stage. Returns true if anything retired.
pub fn commit_stage(state: &mut SimState) -> bool {
    let cycle = state.cycle;
    let mut progressed = false;

    loop {
        let instructions = &state.instructions;
        let Some(id) = state
            .rob
            .commit_head(|head| instructions[head.0].has_written_back())
        else {
            break;
        };

        let inst = state.inst_mut(id);
        inst.stamp(Stage::Commit, cycle);
        debug!(cycle, inst = %inst, "committed");
        state.pending_reclaim.push(id);
        state.note_commit();
        progressed = true;
    }

    progressed
}
