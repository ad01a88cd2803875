use std::io::Cursor;

use ooosim_core::config::GeneralConfig;
use ooosim_core::isa::Instruction;
use ooosim_core::{SimError, Simulator, TimingReport, TraceReader};

use super::builder::TraceBuilder;

type TraceSim = Simulator<TraceReader<Cursor<String>>>;

#[derive(Debug)]
pub struct TestContext {
    pub sim: TraceSim,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

impl TestContext {
    /// Loads `trace` with invariant checking enabled.
    pub fn new(trace: &str) -> Self {
        let general = GeneralConfig {
            check_invariants: true,
            ..GeneralConfig::default()
        };
        Self::try_with_general(trace, general)
            .unwrap_or_else(|e| panic!("trace failed to load: {e}"))
    }

    pub fn from_builder(builder: &TraceBuilder) -> Self {
        Self::new(&builder.build())
    }

    pub fn try_with_general(trace: &str, general: GeneralConfig) -> Result<Self, SimError> {
        init_tracing();
        let reader = TraceReader::new(Cursor::new(trace.to_owned()))?;
        let sim = Simulator::from_trace(reader, general)?;
        Ok(Self { sim })
    }

    /// Runs to completion.
    pub fn run(&mut self) -> Result<(), SimError> {
        self.sim.run()
    }

    /// Runs to completion and panics on any error.
    pub fn run_ok(mut self) -> Self {
        if let Err(e) = self.sim.run() {
            panic!("simulation failed: {e}");
        }
        self
    }

    pub fn report(&self) -> TimingReport {
        self.sim.report()
    }

    /// Stage cycles of instruction `idx`.
    pub fn times(&self, idx: usize) -> [u64; 7] {
        self.report().rows()[idx]
    }

    pub fn inst(&self, idx: usize) -> &Instruction {
        &self.sim.state().instructions[idx]
    }
}
