//! Operand stack
//!
//! A LIFO of words that can also be addressed by depth, where depth 0 is
//! the current top. Capacity grows geometrically and growth failures are
//! reported instead of aborting the process.

use core_types::{VmError, VmResult, Word};

/// Capacity reserved by the first push of a run.
pub const INITIAL_CAPACITY: usize = 32;

/// Growable operand stack owned by a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    /// Values from bottom to top
    values: Vec<Word>,
}

impl OperandStack {
    /// Create an empty stack. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Push `value` on top, doubling capacity when the stack is full.
    pub fn push(&mut self, value: Word) -> VmResult<()> {
        let capacity = self.values.capacity();
        if self.values.len() == capacity {
            let additional = capacity.max(INITIAL_CAPACITY);
            self.values
                .try_reserve_exact(additional)
                .map_err(|_| VmError::AllocationFailure { capacity })?;
        }
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> VmResult<Word> {
        self.values.pop().ok_or(VmError::EmptyStack)
    }

    /// Value `depth` entries below the top, without removing it
    pub fn peek_at_depth(&self, depth: Word) -> VmResult<Word> {
        let slot = self.slot(depth)?;
        Ok(self.values[slot])
    }

    /// Move the value `depth` entries below the top onto the top.
    ///
    /// Entries above the removed slot shift down by one; no value is lost
    /// or duplicated.
    pub fn rotate_to_top(&mut self, depth: Word) -> VmResult<()> {
        let slot = self.slot(depth)?;
        let value = self.values.remove(slot);
        self.push(value)
    }

    /// Number of values on the stack
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Currently reserved capacity, never less than [`depth`](Self::depth)
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Values from bottom to top
    pub fn as_slice(&self) -> &[Word] {
        &self.values
    }

    /// Translate a depth operand into a position in `values`.
    fn slot(&self, depth: Word) -> VmResult<usize> {
        let len = self.values.len();
        usize::try_from(depth)
            .ok()
            .filter(|&k| k < len)
            .map(|k| len - 1 - k)
            .ok_or(VmError::InvalidStackIndex {
                index: depth,
                depth: len,
            })
    }
}
