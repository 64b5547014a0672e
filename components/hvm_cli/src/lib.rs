//! HVM command-line front end
//!
//! Turns command-line arguments into a validated program and initial
//! memory, hands them to the interpreter and maps the outcome to an exit
//! code.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod memory_list;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use memory_list::parse_memory_list;
pub use runtime::{RunReport, Runtime};
