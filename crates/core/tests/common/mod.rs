//! Shared test infrastructure.

/// Fluent trace builder.
pub mod builder;

/// Simulation test harness.
pub mod harness;
