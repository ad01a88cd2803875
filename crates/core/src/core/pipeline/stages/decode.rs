//! Decode Stage.
//!
//! Drains the decode latch into the rename latch, stamping the decode cycle.
//! The decode latch never holds more than one cycle's fetch, so the rename
//! latch's admission limit does not stall decode in practice.

use tracing::{debug, trace};

use crate::core::SimState;
use crate::isa::instruction::Stage;

/// Executes the decode stage. Returns true if anything was decoded.
pub fn decode_stage(state: &mut SimState) -> bool {
    let cycle = state.cycle;
    let mut progressed = false;

    while let Some(id) = state.decode_queue.pop_front() {
        if !state.rename_queue.push_back(id) {
            state.decode_queue.push_front(id);
            trace!(cycle, inst = %id, "decode stalled: rename latch full");
            break;
        }
        let inst = state.inst_mut(id);
        inst.stamp(Stage::Decode, cycle);
        debug!(cycle, inst = %inst, "decoded");
        progressed = true;
    }

    progressed
}
