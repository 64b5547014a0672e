//! Addressable HVM memory
//!
//! A fixed block of [`MEMORY_SIZE`] words, separate from the operand stack.

use core_types::{VmError, VmResult, Word, MEMORY_SIZE};

/// Fixed-capacity word memory for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[Word]>,
}

impl Memory {
    /// Create memory whose leading cells are copied from `initial`.
    ///
    /// Values beyond [`MEMORY_SIZE`] are dropped; every cell not covered by
    /// `initial` starts at zero.
    pub fn new(initial: &[Word]) -> Self {
        let mut cells = vec![0; MEMORY_SIZE].into_boxed_slice();
        let n = initial.len().min(MEMORY_SIZE);
        cells[..n].copy_from_slice(&initial[..n]);
        Self { cells }
    }

    /// Read the cell at `address`
    pub fn load(&self, address: Word) -> VmResult<Word> {
        let index = Self::index(address)?;
        Ok(self.cells[index])
    }

    /// Overwrite the cell at `address`
    pub fn store(&mut self, address: Word, value: Word) -> VmResult<()> {
        let index = Self::index(address)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Number of cells, always [`MEMORY_SIZE`]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; memory has a fixed, non-zero size
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in address order
    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }

    fn index(address: Word) -> VmResult<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&index| index < MEMORY_SIZE)
            .ok_or(VmError::InvalidMemoryAddress(address))
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(&[])
    }
}
