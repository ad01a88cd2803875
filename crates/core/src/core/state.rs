//! Simulation state.
//!
//! Everything a cycle mutates lives in one owned [`SimState`] that is passed
//! explicitly to each stage function:
//! 1. **Roster:** Every fetched instruction, indexed by program index.
//! 2. **Queues:** Latches, issue queue, ROB, LSQ, executing set, reclaim list.
//! 3. **Register Renaming:** Map table, free list and ready table.
//! 4. **Bookkeeping:** Cycle counter, fetch flag and statistics.
//!
//! Queues hold [`InstId`]s only; the roster is the single owner of each
//! instruction record.

use crate::config::PipelineConfig;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::issue_queue::IssueQueue;
use crate::core::pipeline::latches::PipelineLatch;
use crate::core::pipeline::lsq::LoadStoreQueue;
use crate::core::pipeline::rob::Rob;
use crate::isa::instruction::{InstId, Instruction};
use crate::stats::SimStats;

/// All mutable state of one scheduling run.
#[derive(Debug)]
pub struct SimState {
    /// Current cycle.
    pub cycle: u64,
    /// Issue width: per-stage admission limit, execution slots and memory ports.
    pub width: usize,
    /// False once the instruction stream reported end-of-stream.
    pub fetching: bool,
    /// Every fetched instruction, in fetch (program) order.
    pub instructions: Vec<Instruction>,
    /// Fetch -> Decode latch.
    pub decode_queue: PipelineLatch,
    /// Decode -> Rename latch.
    pub rename_queue: PipelineLatch,
    /// Rename -> Dispatch latch.
    pub dispatch_queue: PipelineLatch,
    /// Dispatched instructions waiting to issue.
    pub issue_queue: IssueQueue,
    /// Reorder buffer.
    pub rob: Rob,
    /// Load/store queue.
    pub lsq: LoadStoreQueue,
    /// Issued instructions that have not written back.
    pub executing: Vec<InstId>,
    /// Instructions committed last cycle whose displaced register is freed
    /// at the start of this cycle.
    pub pending_reclaim: Vec<InstId>,
    /// Map table, free list and ready table.
    pub regs: RegisterFile,
    /// Performance counters.
    pub stats: SimStats,
    committed: usize,
}

impl SimState {
    /// Creates the reset state for the given machine.
    pub fn new(pipeline: &PipelineConfig) -> Self {
        let width = pipeline.width;
        Self {
            cycle: 0,
            width,
            fetching: true,
            instructions: Vec::new(),
            decode_queue: PipelineLatch::new(width),
            rename_queue: PipelineLatch::new(width),
            dispatch_queue: PipelineLatch::new(width),
            issue_queue: IssueQueue::new(),
            rob: Rob::new(),
            lsq: LoadStoreQueue::new(),
            executing: Vec::new(),
            pending_reclaim: Vec::new(),
            regs: RegisterFile::new(pipeline.phys_regs),
            stats: SimStats::default(),
            committed: 0,
        }
    }

    /// The instruction with program index `id`.
    #[inline]
    pub fn inst(&self, id: InstId) -> &Instruction {
        &self.instructions[id.0]
    }

    #[inline]
    pub(crate) fn inst_mut(&mut self, id: InstId) -> &mut Instruction {
        &mut self.instructions[id.0]
    }

    /// Number of fetched instructions that have not committed.
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.instructions.len() - self.committed
    }

    /// Returns true while instructions remain to be fetched or retired.
    #[inline]
    pub fn is_scheduling(&self) -> bool {
        self.fetching || self.outstanding() > 0
    }

    /// Resets per-cycle admission budgets.
    pub(crate) const fn begin_cycle(&mut self) {
        self.decode_queue.begin_cycle();
        self.rename_queue.begin_cycle();
        self.dispatch_queue.begin_cycle();
    }

    /// Closes the current cycle.
    pub(crate) const fn advance_cycle(&mut self) {
        self.cycle += 1;
        self.stats.cycles = self.cycle;
    }

    pub(crate) const fn note_commit(&mut self) {
        self.committed += 1;
        self.stats.committed += 1;
    }

    pub(crate) fn note_occupancy(&mut self) {
        self.stats.peak_rob = self.stats.peak_rob.max(self.rob.len());
        self.stats.peak_issue_queue = self.stats.peak_issue_queue.max(self.issue_queue.len());
        self.stats.peak_lsq = self.stats.peak_lsq.max(self.lsq.len());
    }
}
