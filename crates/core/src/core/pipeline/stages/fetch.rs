//! Fetch Stage.
//!
//! Pulls up to `width` instructions per cycle from the instruction source,
//! stamps their fetch cycle, adds them to the roster and pushes them into the
//! decode latch. End-of-stream clears the fetch flag for the rest of the run.

use tracing::debug;

use crate::common::error::ParseError;
use crate::core::SimState;
use crate::core::pipeline::traits::InstructionSource;
use crate::isa::instruction::Stage;

/// Executes the fetch stage.
///
/// Returns true if at least one instruction was fetched. A stream format
/// error is returned to the caller and ends the run.
pub fn fetch_stage<S>(state: &mut SimState, source: &mut S) -> Result<bool, ParseError>
where
    S: InstructionSource + ?Sized,
{
    let cycle = state.cycle;
    let mut fetched = 0u64;

    while state.fetching && state.decode_queue.has_room() {
        let Some(mut inst) = source.next_instruction()? else {
            state.fetching = false;
            debug!(cycle, "end of instruction stream");
            break;
        };

        let id = inst.id();
        debug_assert_eq!(id.0, state.instructions.len(), "stream out of program order");
        inst.stamp(Stage::Fetch, cycle);
        debug!(cycle, inst = %inst, "fetched");
        state.instructions.push(inst);

        let admitted = state.decode_queue.push_back(id);
        debug_assert!(admitted);
        fetched += 1;
    }

    state.stats.fetched += fetched;
    Ok(fetched > 0)
}
