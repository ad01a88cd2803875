//! Simulator: owns the pipeline state and its instruction source.
//!
//! One call to [`Simulator::tick`] is one cycle: the stages run tail first
//! (reclaim, commit, writeback, issue, dispatch, rename, decode, fetch) so
//! work can move latch to latch within the cycle. [`Simulator::run`] ticks
//! until the stream is exhausted and every instruction has committed, and
//! turns a cycle without progress into [`SimError::Deadlock`].

use std::io::BufRead;

use tracing::{info, warn};

use crate::common::error::SimError;
use crate::config::{Config, GeneralConfig};
use crate::core::SimState;
use crate::core::pipeline::stages::{
    commit_stage, decode_stage, dispatch_stage, fetch_stage, issue_stage, reclaim_stage,
    rename_stage, writeback_stage,
};
use crate::core::pipeline::traits::InstructionSource;
use crate::sim::loader::TraceReader;
use crate::sim::report::TimingReport;
use crate::stats::SimStats;

/// Top-level simulator: pipeline state plus the stream it fetches from.
#[derive(Debug)]
pub struct Simulator<S> {
    state: SimState,
    source: S,
    config: Config,
}

impl<S: InstructionSource> Simulator<S> {
    /// Creates a simulator in the reset state.
    pub fn new(config: Config, source: S) -> Result<Self, SimError> {
        config.validate()?;
        let state = SimState::new(&config.pipeline);
        Ok(Self {
            state,
            source,
            config,
        })
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Returns whether any stage made progress. Register reclamation alone
    /// is not progress.
    pub fn tick(&mut self) -> Result<bool, SimError> {
        let state = &mut self.state;
        state.begin_cycle();

        reclaim_stage(state);
        let mut progressed = commit_stage(state);
        progressed |= writeback_stage(state);
        progressed |= issue_stage(state);
        progressed |= dispatch_stage(state);
        progressed |= rename_stage(state);
        progressed |= decode_stage(state);
        progressed |= fetch_stage(state, &mut self.source)?;

        if self.config.general.check_invariants {
            state
                .regs
                .check_invariants()
                .map_err(|violation| SimError::Invariant {
                    cycle: state.cycle,
                    detail: violation.to_string(),
                })?;
        }

        state.advance_cycle();
        Ok(progressed)
    }

    /// Runs until every instruction has committed.
    pub fn run(&mut self) -> Result<(), SimError> {
        info!(
            phys_regs = self.config.pipeline.phys_regs,
            width = self.config.pipeline.width,
            "simulation started"
        );

        while self.state.is_scheduling() {
            let cycle = self.state.cycle;
            if let Some(limit) = self.config.general.max_cycles.filter(|&limit| cycle >= limit) {
                warn!(limit, "cycle limit reached");
                return Err(SimError::CycleLimit { limit });
            }

            if !self.tick()? && self.state.is_scheduling() {
                let outstanding = self.state.outstanding();
                warn!(cycle, outstanding, "no stage made progress");
                return Err(SimError::Deadlock { cycle, outstanding });
            }
        }

        info!(
            cycles = self.state.cycle,
            committed = self.state.stats.committed,
            "simulation finished"
        );
        Ok(())
    }

    /// Captures the per-instruction timing report.
    pub fn report(&self) -> TimingReport {
        TimingReport::capture(&self.state)
    }

    /// Current pipeline state.
    pub const fn state(&self) -> &SimState {
        &self.state
    }

    /// Consumes the simulator and returns its final state.
    pub fn into_state(self) -> SimState {
        self.state
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Current cycle.
    pub const fn cycle(&self) -> u64 {
        self.state.cycle
    }

    /// Returns true while instructions remain to be fetched or retired.
    pub fn is_scheduling(&self) -> bool {
        self.state.is_scheduling()
    }

    /// Performance counters so far.
    pub const fn stats(&self) -> &SimStats {
        &self.state.stats
    }
}

impl<R: BufRead> Simulator<TraceReader<R>> {
    /// Creates a simulator for a trace, taking machine parameters from its
    /// header.
    pub fn from_trace(reader: TraceReader<R>, general: GeneralConfig) -> Result<Self, SimError> {
        let config = Config {
            general,
            pipeline: reader.pipeline_config(),
        };
        Self::new(config, reader)
    }
}
