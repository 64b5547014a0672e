//! Per-run execution statistics
//!
//! Purely observational: nothing recorded here feeds back into execution.

use serde::Serialize;

/// Branch outcome for profiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Branch was taken
    Taken,
    /// Branch was not taken
    NotTaken,
}

/// Counters collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionProfile {
    /// Instructions fetched and dispatched, including one that failed
    pub instructions_executed: u64,
    /// Conditional jumps whose condition was zero
    pub branches_taken: u64,
    /// Conditional jumps that fell through
    pub branches_not_taken: u64,
    /// Deepest the operand stack got after any instruction
    pub max_stack_depth: usize,
}

impl ExecutionProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dispatched instruction
    pub fn record_execution(&mut self) {
        self.instructions_executed += 1;
    }

    /// Record the outcome of a conditional jump
    pub fn record_branch(&mut self, outcome: BranchOutcome) {
        match outcome {
            BranchOutcome::Taken => self.branches_taken += 1,
            BranchOutcome::NotTaken => self.branches_not_taken += 1,
        }
    }

    /// Record the stack depth after an instruction completed
    pub fn record_stack_depth(&mut self, depth: usize) {
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }
}
