//! Execution context for VM

use bytecode_system::{Instruction, Program};
use core_types::{VmError, VmResult, Word};

/// The program being run and where the run currently is in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// The decoded program
    pub program: Program,
    /// Index of the next instruction; jumps may move it out of range
    pub program_counter: i64,
}

impl ExecutionContext {
    /// Create a context positioned at the first instruction
    pub fn new(program: Program) -> Self {
        Self {
            program,
            program_counter: 0,
        }
    }

    /// Instruction at the program counter, together with its position.
    ///
    /// Returns `Ok(None)` when the counter sits exactly one past the last
    /// instruction, which is how a program that runs off its end finishes.
    /// Any other position outside the program is an error.
    pub fn fetch(&self) -> VmResult<Option<(usize, Instruction)>> {
        let len = self.program.len();
        let out_of_bounds = || VmError::ProgramCounterOutOfBounds {
            pc: self.program_counter,
            len,
        };
        let pc = usize::try_from(self.program_counter).map_err(|_| out_of_bounds())?;
        if pc == len {
            return Ok(None);
        }
        let inst = self.program.get(pc).ok_or_else(out_of_bounds)?;
        Ok(Some((pc, inst)))
    }

    /// Move to the next instruction
    pub fn advance(&mut self) {
        self.program_counter += 1;
    }

    /// Relative jump. The displacement is counted from the jumping
    /// instruction and the usual single-step advance still applies, so the
    /// counter moves by `offset + 1` in total.
    pub fn jump(&mut self, offset: Word) {
        self.program_counter += i64::from(offset) + 1;
    }
}
