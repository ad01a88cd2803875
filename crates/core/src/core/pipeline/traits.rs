//! Pipeline Input Interface.
//!
//! This module defines the seam between the pipeline and whatever produces
//! instructions. It provides:
//! 1. **Instruction Source Interface:** A lazy, finite, non-restartable stream of instructions.
//! 2. **In-memory Source:** A ready-made source over a vector, for tests and embedders.

use crate::common::error::ParseError;
use crate::isa::instruction::Instruction;

/// A lazy, finite stream of instructions in program order.
///
/// The fetch stage pulls from the source until it reports end-of-stream
/// with `Ok(None)`; it never asks again after that. A stream format error
/// is fatal and ends the run.
pub trait InstructionSource {
    /// Returns the next instruction, `Ok(None)` at end-of-stream.
    fn next_instruction(&mut self) -> Result<Option<Instruction>, ParseError>;
}

impl InstructionSource for std::vec::IntoIter<Instruction> {
    fn next_instruction(&mut self) -> Result<Option<Instruction>, ParseError> {
        Ok(self.next())
    }
}

impl<S: InstructionSource + ?Sized> InstructionSource for &mut S {
    fn next_instruction(&mut self) -> Result<Option<Instruction>, ParseError> {
        (**self).next_instruction()
    }
}
