//! Instruction model.
//!
//! The scheduler does not execute instructions; it only needs their operand
//! shape and a place to record when each pipeline stage handled them.
//!
//! # Kinds
//!
//! * `R`: register-register operation (`dst <- src0, src1`).
//! * `I`: register-immediate operation (`dst <- src0, imm`).
//! * `L`: load (`dst <- [src0 + imm]`).
//! * `S`: store (`[src1 + imm] <- src0`).

/// Instruction records, operand kinds and per-stage timestamps.
pub mod instruction;

pub use instruction::{InstId, InstKind, InstState, Instruction, RenamedOperands, Stage, StageTimes};
