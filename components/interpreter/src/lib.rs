//! Interpreter for HVM programs
//!
//! This crate provides the HVM virtual machine:
//! - [`Memory`] - fixed block of addressable words
//! - [`OperandStack`] - growable stack addressable by depth from the top
//! - [`Interpreter`] - fetch/dispatch loop owning all state of one run
//! - [`ExecutionProfile`] - counters collected while a run executes
//!
//! # Example
//!
//! ```
//! use core_types::Status;
//! use interpreter::execute_program;
//!
//! let mut out = Vec::new();
//! let status = execute_program("123451^2v5:4?9p2g8pppppp", &[], &mut out);
//!
//! assert_eq!(status, Status::Ok);
//! assert_eq!(out, b"945321");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod memory;
pub mod profile;
pub mod stack;
pub mod vm;

mod dispatch;

// Re-export main types at crate root
pub use context::ExecutionContext;
pub use memory::Memory;
pub use profile::{BranchOutcome, ExecutionProfile};
pub use stack::OperandStack;
pub use vm::{execute_program, Interpreter, RunState, StepOutcome};
