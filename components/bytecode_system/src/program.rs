//! HVM programs
//!
//! A [`Program`] is the decoded, immutable instruction sequence of one run.

use crate::instruction::Instruction;
use std::fmt;
use std::fmt::Write as _;

/// A decoded HVM program, indexed by the program counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// One instruction per source character
    instructions: Vec<Instruction>,
}

impl Program {
    /// Decode program text, one instruction per character.
    pub fn parse(source: &str) -> Self {
        Self {
            instructions: source.chars().map(Instruction::decode).collect(),
        }
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions at all
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `pc`, if `pc` is inside the program
    pub fn get(&self, pc: usize) -> Option<Instruction> {
        self.instructions.get(pc).copied()
    }

    /// Human-readable listing, one instruction per line.
    ///
    /// ```
    /// use bytecode_system::Program;
    ///
    /// let listing = Program::parse("9p").listing();
    /// assert_eq!(listing, "0000  '9'  push 9\n0001  'p'  print\n");
    /// ```
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (pc, inst) in self.instructions.iter().enumerate() {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{:04}  {:?}  {}", pc, inst.symbol(), inst);
        }
        out
    }
}

/// Renders the program back to its source text.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            f.write_char(inst.symbol())?;
        }
        Ok(())
    }
}
