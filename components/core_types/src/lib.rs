//! Core HVM types: words, memory geometry, run statuses and errors.
//!
//! This crate holds the vocabulary shared by every other HVM component, so
//! that the instruction decoder, the interpreter and the command-line front
//! end agree on what a run can end with.
//!
//! # Overview
//!
//! - [`Word`] - The signed integer every stack slot and memory cell holds
//! - [`MEMORY_SIZE`] - Number of addressable memory cells
//! - [`Status`] - Closed set of terminal run statuses
//! - [`VmError`] - Detailed error for every non-`Ok` status
//!
//! # Examples
//!
//! ```
//! use core_types::{Status, VmError};
//!
//! let error = VmError::DivisionByZero;
//! assert_eq!(error.status(), Status::DivisionByZero);
//! assert_eq!(error.status().code(), 5);
//! assert_eq!(Status::from(Err::<(), _>(error)), Status::DivisionByZero);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod status;

pub use error::{VmError, VmResult};
pub use status::Status;

/// A single HVM value: stack slots, memory cells and operands are all words.
pub type Word = i32;

/// Number of cells in HVM memory. Valid addresses are `0..MEMORY_SIZE`.
pub const MEMORY_SIZE: usize = 16384;
