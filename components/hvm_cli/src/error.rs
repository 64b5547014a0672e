//! Error types for the CLI

use core_types::{Status, VmError};
use std::io;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for wrong argument counts and other usage errors
pub const EXIT_USAGE: i32 = 1;
/// Exit code for a malformed memory list
pub const EXIT_MALFORMED_MEMORY: i32 = 2;
/// Exit code for a program that ended with a non-`Ok` status
pub const EXIT_PROGRAM_FAILED: i32 = 3;
/// Exit code for host failures: allocation or output
pub const EXIT_HOST_FAILURE: i32 = 255;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments could not be parsed
    #[error("{0}")]
    Usage(String),

    /// An element of the memory list is not an optionally signed integer
    #[error("malformed memory list: {element:?} is not an integer")]
    MalformedMemory {
        /// The offending element
        element: String,
    },

    /// Memory list validation pattern failed to compile
    #[error("invalid memory list pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The program ended with a failure status
    #[error("{0}")]
    Program(#[from] VmError),

    /// Output or diagnostics could not be written
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Statistics could not be encoded
    #[error("failed to encode statistics: {0}")]
    Stats(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::MalformedMemory { .. } => EXIT_MALFORMED_MEMORY,
            CliError::Program(e) if e.status() == Status::AllocationFailure => EXIT_HOST_FAILURE,
            CliError::Program(_) => EXIT_PROGRAM_FAILED,
            CliError::Pattern(_) | CliError::Io(_) | CliError::Stats(_) => EXIT_HOST_FAILURE,
        }
    }

    /// Run status behind this error, for errors raised by the interpreter
    pub fn status(&self) -> Option<Status> {
        match self {
            CliError::Program(e) => Some(e.status()),
            _ => None,
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        CliError::Usage(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
