//! Run errors.
//!
//! [`VmError`] carries the detail of a failed run; [`VmError::status`]
//! collapses it to the [`Status`] the run ends with.

use crate::{Status, Word};
use std::io;
use thiserror::Error;

/// Why an HVM run stopped early.
#[derive(Debug, Error)]
pub enum VmError {
    /// A jump left the program counter outside `[0, len]`
    #[error("program counter {pc} is out of bounds for a program of length {len}")]
    ProgramCounterOutOfBounds {
        /// Offending program counter
        pc: i64,
        /// Program length
        len: usize,
    },

    /// No instruction is mapped to the character
    #[error("unknown instruction {instruction:?} at position {pc}")]
    UnknownInstruction {
        /// Position of the instruction
        pc: usize,
        /// The unmapped character
        instruction: char,
    },

    /// Pop with depth 0
    #[error("tried to pop from an empty stack")]
    EmptyStack,

    /// Peek or rotate outside `[0, depth)`
    #[error("stack index {index} is out of range for depth {depth}")]
    InvalidStackIndex {
        /// Requested depth from the top
        index: Word,
        /// Stack depth at the time of the request
        depth: usize,
    },

    /// Zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Load or store outside `[0, MEMORY_SIZE)`
    #[error("memory address {0} is out of range")]
    InvalidMemoryAddress(Word),

    /// Stack growth could not be satisfied
    #[error("could not grow the operand stack beyond {capacity} entries")]
    AllocationFailure {
        /// Capacity at the time of the failed growth
        capacity: usize,
    },

    /// Program output could not be written
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),
}

impl VmError {
    /// The terminal status this error ends a run with.
    ///
    /// Output failures share [`Status::AllocationFailure`]'s code: both are
    /// host-side failures rather than faults of the program.
    pub fn status(&self) -> Status {
        match self {
            VmError::ProgramCounterOutOfBounds { .. } => Status::ProgramCounterOutOfBounds,
            VmError::UnknownInstruction { .. } => Status::UnknownInstruction,
            VmError::EmptyStack => Status::EmptyStack,
            VmError::InvalidStackIndex { .. } => Status::InvalidStackIndex,
            VmError::DivisionByZero => Status::DivisionByZero,
            VmError::InvalidMemoryAddress(_) => Status::InvalidMemoryAddress,
            VmError::AllocationFailure { .. } | VmError::Output(_) => Status::AllocationFailure,
        }
    }
}

impl<T> From<Result<T, VmError>> for Status {
    fn from(result: Result<T, VmError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Result type for interpreter operations
pub type VmResult<T> = Result<T, VmError>;
