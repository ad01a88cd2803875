//! Configuration, stream-format and simulation errors.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Configuration Errors:** Malformed trace header or unusable machine parameters.
//! 2. **Stream Format Errors:** Instruction lines matching no instruction grammar.
//! 3. **Simulation Errors:** Deadlock and model-invariant failures, kept distinct from input errors.
//!
//! Resource exhaustion (no free register, no issue slot, no memory port) is
//! not an error: stages report it as a stall and retry the next cycle.

use std::io;

use thiserror::Error;

/// Invalid machine configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The header line is not `<physRegCount>,<issueWidth>`.
    #[error("invalid input file header: {line:?}")]
    InvalidHeader {
        /// The offending header line.
        line: String,
    },

    /// Fewer physical registers than architectural registers.
    #[error(
        "invalid input file header: number of physical registers ({found}) is less than allowed minimum of {min}"
    )]
    TooFewPhysRegs {
        /// Physical register count requested by the configuration.
        found: usize,
        /// Minimum accepted physical register count.
        min: usize,
    },

    /// An issue width of zero could never fetch an instruction.
    #[error("invalid input file header: issue width must be at least 1")]
    ZeroWidth,
}

/// Malformed instruction stream.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The stream ended before the header line.
    #[error("input file is empty: missing header line")]
    MissingHeader,

    /// A line matching no instruction grammar.
    #[error("invalid instruction on line {line}: {text:?}")]
    InvalidInstruction {
        /// One-based line number in the input file.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A register operand outside the architectural register file.
    #[error("register r{reg} on line {line} is not an architectural register")]
    RegisterOutOfRange {
        /// One-based line number in the input file.
        line: usize,
        /// The offending register id.
        reg: u64,
    },

    /// Reading the underlying stream failed.
    #[error("error reading input: {0}")]
    Io(#[from] io::Error),
}

/// Failure of a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Unusable machine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed instruction stream.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A full cycle passed without any stage making progress while
    /// instructions were still outstanding.
    #[error("pipeline deadlock at cycle {cycle}: {outstanding} instruction(s) never committed")]
    Deadlock {
        /// Cycle in which no stage made progress.
        cycle: u64,
        /// Fetched instructions that have not committed.
        outstanding: usize,
    },

    /// A register-file invariant was broken at a cycle boundary.
    #[error("register file invariant violated at cycle {cycle}: {detail}")]
    Invariant {
        /// Cycle boundary at which the violation was observed.
        cycle: u64,
        /// Description of the violated invariant.
        detail: String,
    },

    /// The configured cycle limit elapsed before the run finished.
    #[error("simulation did not finish within {limit} cycles")]
    CycleLimit {
        /// The configured limit.
        limit: u64,
    },

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SimError {
    /// Returns true for errors raised by the pipeline model itself rather
    /// than by its inputs.
    ///
    /// These runs still leave a guarded (empty) timing report behind.
    pub const fn is_model_failure(&self) -> bool {
        matches!(
            self,
            Self::Deadlock { .. } | Self::Invariant { .. } | Self::CycleLimit { .. }
        )
    }

    /// Returns true if the run stopped because the pipeline deadlocked.
    pub const fn is_deadlock(&self) -> bool {
        matches!(self, Self::Deadlock { .. })
    }
}
