//! Configuration system for the scheduler simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine parameters (physical registers, issue width).
//! 2. **Structures:** General run settings and pipeline machine parameters.
//! 3. **Validation:** Rejection of machine shapes the model cannot simulate.
//!
//! The pipeline parameters come from the header line of the instruction trace;
//! the general settings may be supplied as JSON, or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants::MIN_PHYS_REGS;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default physical register count (the smallest legal file).
    pub const PHYS_REGS: usize = super::MIN_PHYS_REGS;

    /// Default issue width (1 instruction per stage per cycle).
    pub const WIDTH: usize = 1;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ooosim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_cycles": 100000
///     },
///     "pipeline": {
///         "phys_regs": 64,
///         "width": 4
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(100_000));
/// assert_eq!(config.pipeline.phys_regs, 64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine parameters
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Checks that the machine described by this configuration can be simulated.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        self.pipeline.validate()
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit per-instruction stage events at debug level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort the run after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Verify register-file invariants at every cycle boundary.
    #[serde(default)]
    pub check_invariants: bool,
}

/// Machine parameters: register file size and superscalar width.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Number of physical registers.
    #[serde(default = "PipelineConfig::default_phys_regs")]
    pub phys_regs: usize,

    /// Instructions admitted per stage per cycle; also the execution-slot
    /// and memory-port budget.
    #[serde(default = "PipelineConfig::default_width")]
    pub width: usize,
}

impl PipelineConfig {
    /// Returns the default physical register count.
    const fn default_phys_regs() -> usize {
        defaults::PHYS_REGS
    }

    /// Returns the default issue width.
    const fn default_width() -> usize {
        defaults::WIDTH
    }
}

impl PipelineConfig {
    /// Rejects register files smaller than the architectural file and a
    /// zero issue width.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.phys_regs < MIN_PHYS_REGS {
            return Err(ConfigError::TooFewPhysRegs {
                found: self.phys_regs,
                min: MIN_PHYS_REGS,
            });
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            phys_regs: defaults::PHYS_REGS,
            width: defaults::WIDTH,
        }
    }
}
