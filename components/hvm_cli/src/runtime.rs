//! Runtime orchestration for a single HVM run
//!
//! The Runtime decodes the program, drives the interpreter one step at a
//! time and reports what happened. Program output goes to one writer and
//! diagnostics (listing, trace, statistics) to another.

use crate::error::CliResult;
use crate::memory_list::parse_memory_list;
use bytecode_system::Program;
use core_types::{Status, VmResult, Word};
use interpreter::{ExecutionProfile, Interpreter, StepOutcome};
use serde::Serialize;
use std::io::{self, Write};

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Final status
    pub status: Status,
    /// Numeric status code
    pub code: u8,
    /// Counters collected during the run
    pub profile: ExecutionProfile,
    /// Operand stack at the end of the run, bottom first
    pub final_stack: Vec<Word>,
}

/// Runs programs with the configured diagnostics
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    /// Whether to trace every executed instruction
    trace: bool,
    /// Whether to print the program listing before execution
    print_program: bool,
    /// Whether to print statistics after execution
    stats: bool,
}

impl Runtime {
    /// Create a runtime with all diagnostics off
    ///
    /// # Example
    /// ```
    /// use hvm_cli::Runtime;
    ///
    /// let runtime = Runtime::new().with_stats(true);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable instruction tracing
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Enable the program listing
    pub fn with_print_program(mut self, enabled: bool) -> Self {
        self.print_program = enabled;
        self
    }

    /// Enable JSON statistics
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.stats = enabled;
        self
    }

    /// Parse the memory argument, then execute.
    ///
    /// A missing memory argument means all-zero memory.
    pub fn execute_args<W: Write, D: Write>(
        &self,
        source: &str,
        memory: Option<&str>,
        out: &mut W,
        diag: &mut D,
    ) -> CliResult<RunReport> {
        let memory = match memory {
            Some(text) => parse_memory_list(text)?,
            None => Vec::new(),
        };
        self.execute(source, &memory, out, diag)
    }

    /// Execute `source` against `memory`.
    ///
    /// Output written before a failure is flushed and kept. Statistics are
    /// printed for failed runs too.
    ///
    /// # Errors
    /// Returns `CliError::Program` when the run ends with a non-`Ok` status.
    /// That error takes precedence over `CliError::Io` from flushing `out`
    /// or writing diagnostics, which is reported only for successful runs.
    ///
    /// # Example
    /// ```
    /// use core_types::Status;
    /// use hvm_cli::Runtime;
    ///
    /// let mut out = Vec::new();
    /// let report = Runtime::new()
    ///     .execute("123451^2v5:4?9p2g8pppppp", &[], &mut out, &mut std::io::sink())
    ///     .unwrap();
    /// assert_eq!(out, b"945321");
    /// assert_eq!(report.status, Status::Ok);
    /// ```
    pub fn execute<W: Write, D: Write>(
        &self,
        source: &str,
        memory: &[Word],
        out: &mut W,
        diag: &mut D,
    ) -> CliResult<RunReport> {
        let program = Program::parse(source);

        if self.print_program {
            writeln!(diag, "=== Program ({} instructions) ===", program.len())?;
            write!(diag, "{}", program.listing())?;
            writeln!(diag)?;
        }

        let mut interp = Interpreter::new(program, memory, &mut *out);
        let (result, traced) = self.drive(&mut interp, diag);

        let status = match &result {
            Ok(()) => Status::Ok,
            Err(e) => e.status(),
        };
        let report = RunReport {
            status,
            code: status.code(),
            profile: interp.profile().clone(),
            final_stack: interp.stack().as_slice().to_vec(),
        };
        drop(interp);

        let flushed = out.flush();
        let stats = if self.stats {
            write_stats(&report, diag)
        } else {
            Ok(())
        };

        result?;
        flushed?;
        traced?;
        stats?;
        Ok(report)
    }

    /// Run to completion, tracing each successful step when enabled.
    ///
    /// A failed trace write stops tracing but not the run; the first such
    /// error is returned next to the run result.
    fn drive<W: Write, D: Write>(
        &self,
        interp: &mut Interpreter<W>,
        diag: &mut D,
    ) -> (VmResult<()>, io::Result<()>) {
        if !self.trace {
            return (interp.run(), Ok(()));
        }

        let mut traced = Ok(());
        loop {
            let pc = interp.pc();
            let inst = interp.current_instruction();
            let outcome = match interp.step() {
                Ok(outcome) => outcome,
                Err(e) => return (Err(e), traced),
            };
            if let Some(inst) = inst.filter(|_| traced.is_ok()) {
                traced = writeln!(
                    diag,
                    "{:04}  {:?}  {:<12}  {:?}",
                    pc,
                    inst.symbol(),
                    inst.to_string(),
                    interp.stack().as_slice()
                );
            }
            if outcome == StepOutcome::Halted {
                return (Ok(()), traced);
            }
        }
    }
}

fn write_stats<D: Write>(report: &RunReport, diag: &mut D) -> CliResult<()> {
    writeln!(diag, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}
