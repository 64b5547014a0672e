//! Instruction set for the HVM
//!
//! An HVM program is plain text: every character is one instruction. This
//! crate decodes that text into a [`Program`] of [`Instruction`]s so the
//! interpreter can dispatch on a tagged variant instead of raw characters.
//!
//! Decoding is total. Characters without a mapping become
//! [`Instruction::Unknown`] and only fail once the interpreter reaches them,
//! so a program may carry garbage behind a halt.
//!
//! # Example
//!
//! ```
//! use bytecode_system::{Instruction, Program};
//!
//! let program = Program::parse("11+p");
//!
//! assert_eq!(program.len(), 4);
//! assert_eq!(program.get(0), Some(Instruction::Push(1)));
//! assert_eq!(program.get(2), Some(Instruction::Add));
//! assert_eq!(program.get(4), None);
//! assert_eq!(program.to_string(), "11+p");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod instruction;
pub mod program;

// Re-export main types at crate root
pub use instruction::Instruction;
pub use program::Program;
