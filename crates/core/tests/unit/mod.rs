//! # Unit Components
//!
//! Tests grouped by the part of the public API they exercise.


/// Trace header and instruction line parsing.
pub mod loader;

/// Randomized pipeline properties.
pub mod properties;

/// Timing report rendering.
pub mod report;

/// Hand-checked pipeline timings.
pub mod scenarios;
