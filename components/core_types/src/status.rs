//! Terminal run statuses.
//!
//! Every run produces exactly one [`Status`]. The numeric codes are stable
//! and are what external tooling sees.

use serde::Serialize;
use std::fmt;

/// The closed set of ways an HVM run can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// Program halted via `!` or ran off the end
    Ok,
    /// A jump moved the program counter outside the program
    ProgramCounterOutOfBounds,
    /// The program contained a character with no instruction mapping
    UnknownInstruction,
    /// An instruction tried to pop from an empty stack
    EmptyStack,
    /// `^` or `v` named a depth outside the stack
    InvalidStackIndex,
    /// `/` with a zero divisor
    DivisionByZero,
    /// `<` or `>` named an address outside memory
    InvalidMemoryAddress,
    /// The host could not provide resources for the run
    AllocationFailure,
}

impl Status {
    /// Numeric status code.
    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::ProgramCounterOutOfBounds => 1,
            Status::UnknownInstruction => 2,
            Status::EmptyStack => 3,
            Status::InvalidStackIndex => 4,
            Status::DivisionByZero => 5,
            Status::InvalidMemoryAddress => 6,
            Status::AllocationFailure => 255,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Ok => "ok",
            Status::ProgramCounterOutOfBounds => "program counter out of bounds",
            Status::UnknownInstruction => "unknown instruction",
            Status::EmptyStack => "empty stack",
            Status::InvalidStackIndex => "invalid stack index",
            Status::DivisionByZero => "division by zero",
            Status::InvalidMemoryAddress => "invalid memory address",
            Status::AllocationFailure => "allocation failure",
        };
        f.write_str(text)
    }
}
