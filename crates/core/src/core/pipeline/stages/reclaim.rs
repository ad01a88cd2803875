//! Deferred register reclamation.
//!
//! One cycle after an instruction commits, the physical register its
//! destination displaced at rename time returns to the free list. Any reader
//! renamed against the old mapping is older than the committing instruction
//! and has therefore already consumed it.

use tracing::debug;

use crate::core::SimState;

/// Frees the registers displaced by instructions committed last cycle.
///
/// Reclamation is bookkeeping and does not count as pipeline progress.
pub fn reclaim_stage(state: &mut SimState) {
    let cycle = state.cycle;

    for id in std::mem::take(&mut state.pending_reclaim) {
        if let Some(reg) = state.inst(id).overwritten() {
            let freed = state.regs.free(reg);
            debug_assert!(freed, "{reg} reclaimed twice");
            debug!(cycle, inst = %id, reg = %reg, "register reclaimed");
        }
        state.inst_mut(id).mark_reclaimed();
    }
}
