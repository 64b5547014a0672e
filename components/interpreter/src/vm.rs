//! Virtual Machine for HVM programs
//!
//! Main entry point for running a program to completion.

use bytecode_system::{Instruction, Program};
use core_types::{Status, VmResult, Word};
use std::io::Write;

use crate::context::ExecutionContext;
use crate::dispatch::Flow;
use crate::memory::Memory;
use crate::profile::ExecutionProfile;
use crate::stack::OperandStack;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// More instructions may execute
    Running,
    /// The run is over and ended with this status
    Halted(Status),
}

/// Result of a single [`Interpreter::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed and the run goes on
    Continue,
    /// The run finished successfully (or had already finished)
    Halted,
}

/// Interpreter for one HVM run
///
/// Owns every piece of mutable run state: program counter, memory, operand
/// stack and profile. Nothing is shared between instances, so separate
/// interpreters can run on separate threads.
///
/// Program output (`p` and `P`) goes to `output`. The interpreter never
/// writes diagnostics of its own.
#[derive(Debug)]
pub struct Interpreter<W> {
    /// Program and program counter
    context: ExecutionContext,
    /// Addressable memory
    pub(crate) memory: Memory,
    /// Operand stack
    pub(crate) stack: OperandStack,
    /// Sink for program output
    pub(crate) output: W,
    /// Statistics for this run
    pub(crate) profile: ExecutionProfile,
    state: RunState,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter positioned at the start of `program`
    ///
    /// # Arguments
    ///
    /// * `program` - The decoded program
    /// * `initial_memory` - Values for the leading memory cells
    /// * `output` - Where `p` and `P` write
    pub fn new(program: Program, initial_memory: &[Word], output: W) -> Self {
        Self {
            context: ExecutionContext::new(program),
            memory: Memory::new(initial_memory),
            stack: OperandStack::new(),
            output,
            profile: ExecutionProfile::new(),
            state: RunState::Running,
        }
    }

    /// Run until the program halts, runs off its end, or fails
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The run ended with [`Status::Ok`]
    /// * `Err(VmError)` - The error that ended the run
    ///
    /// # Example
    ///
    /// ```
    /// use bytecode_system::Program;
    /// use interpreter::Interpreter;
    ///
    /// let mut out = Vec::new();
    /// let mut interp = Interpreter::new(Program::parse("67*p"), &[], &mut out);
    /// interp.run().unwrap();
    /// assert_eq!(out, b"42");
    /// ```
    pub fn run(&mut self) -> VmResult<()> {
        while self.step()? == StepOutcome::Continue {}
        Ok(())
    }

    /// Execute exactly one instruction.
    ///
    /// Once the run is over, further calls do nothing and report
    /// [`StepOutcome::Halted`]; [`state`](Self::state) holds the final status.
    pub fn step(&mut self) -> VmResult<StepOutcome> {
        if self.state != RunState::Running {
            return Ok(StepOutcome::Halted);
        }

        let result = self.execute_next();
        match &result {
            Ok(StepOutcome::Continue) => {}
            Ok(StepOutcome::Halted) => self.state = RunState::Halted(Status::Ok),
            Err(e) => self.state = RunState::Halted(e.status()),
        }
        result
    }

    fn execute_next(&mut self) -> VmResult<StepOutcome> {
        let Some((pc, inst)) = self.context.fetch()? else {
            return Ok(StepOutcome::Halted);
        };

        self.profile.record_execution();
        match self.dispatch(pc, inst)? {
            Flow::Next => self.context.advance(),
            Flow::Jump(offset) => self.context.jump(offset),
            Flow::Halt => return Ok(StepOutcome::Halted),
        }
        self.profile.record_stack_depth(self.stack.depth());

        Ok(StepOutcome::Continue)
    }

    /// Current program counter
    pub fn pc(&self) -> i64 {
        self.context.program_counter
    }

    /// The program being run
    pub fn program(&self) -> &Program {
        &self.context.program
    }

    /// Instruction the next step will execute, if the counter is in range
    pub fn current_instruction(&self) -> Option<Instruction> {
        usize::try_from(self.context.program_counter)
            .ok()
            .and_then(|pc| self.context.program.get(pc))
    }

    /// Operand stack
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    /// Memory
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Statistics collected so far
    pub fn profile(&self) -> &ExecutionProfile {
        &self.profile
    }

    /// Whether the run is still going
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Final status, once the run is over
    pub fn status(&self) -> Option<Status> {
        match self.state {
            RunState::Running => None,
            RunState::Halted(status) => Some(status),
        }
    }

    /// Output sink
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Run `program` against fresh memory and stack, writing its output to `output`.
///
/// Output written before a failure is kept.
///
/// # Example
///
/// ```
/// use core_types::Status;
/// use interpreter::execute_program;
///
/// let mut out = Vec::new();
/// assert_eq!(execute_program("11+p", &[], &mut out), Status::Ok);
/// assert_eq!(out, b"2");
///
/// assert_eq!(execute_program("50/", &[], &mut Vec::new()), Status::DivisionByZero);
/// ```
pub fn execute_program<W: Write>(program: &str, initial_memory: &[Word], output: &mut W) -> Status {
    let mut interpreter = Interpreter::new(Program::parse(program), initial_memory, output);
    Status::from(interpreter.run())
}
