//! Issue Stage: out-of-order selection from the issue queue.
//!
//! One scan per cycle over the issue queue in dispatch order. A candidate is
//! ready when every physical source is ready and, for loads and stores, the
//! LSQ lets it access memory. The first `width - executing` ready candidates
//! issue; the rest wait. Selection is computed first and applied afterwards,
//! so the queue is never mutated while it is being scanned.

use tracing::{debug, trace};

use crate::core::SimState;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::lsq::LoadStoreQueue;
use crate::isa::instruction::{Instruction, Stage};

/// Why a waiting instruction cannot issue this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hold {
    /// A source register has not been written back.
    Operands,
    /// An older memory instruction is still resident in the LSQ.
    MemoryOrder,
}

/// Checks whether `inst` could issue right now.
fn readiness(inst: &Instruction, regs: &RegisterFile, lsq: &LoadStoreQueue) -> Result<(), Hold> {
    let Some(ops) = inst.renamed() else {
        return Err(Hold::Operands);
    };
    let sources_ready =
        regs.is_ready(ops.src0) && ops.src1.is_none_or(|src1| regs.is_ready(src1));
    if !sources_ready {
        return Err(Hold::Operands);
    }
    if inst.is_load_store() && !lsq.can_execute(inst.id()) {
        return Err(Hold::MemoryOrder);
    }
    Ok(())
}

/// Executes the issue stage. Returns true if anything was issued.
pub fn issue_stage(state: &mut SimState) -> bool {
    let cycle = state.cycle;
    let budget = state.width.saturating_sub(state.executing.len());

    let mut selected = Vec::new();
    let mut left_behind = 0u64;
    let mut order_holds = 0u64;
    for &id in state.issue_queue.as_slice() {
        match readiness(state.inst(id), &state.regs, &state.lsq) {
            Ok(()) if selected.len() < budget => selected.push(id),
            Ok(()) => left_behind += 1,
            Err(Hold::MemoryOrder) => order_holds += 1,
            Err(Hold::Operands) => {}
        }
    }

    if left_behind > 0 {
        state.stats.stalls_issue_slots += 1;
        trace!(cycle, left_behind, "issue stalled: no execution slots");
    }
    state.stats.lsq_order_holds += order_holds;

    for &id in &selected {
        if let Some(dst) = state.inst(id).phys_dst() {
            state.regs.mark_not_ready(dst);
        }
        let inst = state.inst_mut(id);
        inst.stamp(Stage::Issue, cycle);
        debug!(cycle, inst = %inst, "issued");
        state.executing.push(id);
    }
    state.issue_queue.remove_issued(&selected);

    !selected.is_empty()
}
