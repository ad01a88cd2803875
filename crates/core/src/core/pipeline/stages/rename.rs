//! Rename Stage: map operands to physical registers.
//!
//! Processes the rename latch in program order. Sources are resolved through
//! the map table before the destination is remapped, so an instruction that
//! reads its own destination (`R r5, r5, r1`) sees the previous producer.
//! A destination needs a free physical register; if none is free the
//! instruction goes back to the front of the latch and nothing younger may
//! rename this cycle. Stores have no destination and never stall here.

use tracing::{debug, trace};

use crate::core::SimState;
use crate::isa::instruction::{RenamedOperands, Stage};

/// Executes the rename stage. Returns true if anything was renamed.
pub fn rename_stage(state: &mut SimState) -> bool {
    let cycle = state.cycle;
    let mut progressed = false;

    while let Some(id) = state.rename_queue.pop_front() {
        if !state.dispatch_queue.has_room() {
            state.rename_queue.push_front(id);
            state.stats.stalls_dispatch_latch += 1;
            trace!(cycle, inst = %id, "rename stalled: dispatch latch full");
            break;
        }

        let kind = *state.inst(id).kind();

        // Capture sources BEFORE touching the map table for dst.
        let src0 = state.regs.current_mapping(kind.src0());
        let src1 = kind.src1().map(|r| state.regs.current_mapping(r));

        let (dst, overwritten) = match kind.dst() {
            Some(arch) => {
                let Some(fresh) = state.regs.allocate() else {
                    state.rename_queue.push_front(id);
                    state.stats.stalls_free_list += 1;
                    trace!(cycle, inst = %id, "rename stalled: no free physical register");
                    break;
                };
                let displaced = state.regs.remap(arch, fresh);
                (Some(fresh), Some(displaced))
            }
            None => (None, None),
        };

        let inst = state.inst_mut(id);
        inst.set_renamed(RenamedOperands { dst, src0, src1 }, overwritten);
        inst.stamp(Stage::Rename, cycle);
        debug!(cycle, inst = %inst, "renamed");

        let admitted = state.dispatch_queue.push_back(id);
        debug_assert!(admitted);
        progressed = true;
    }

    progressed
}
