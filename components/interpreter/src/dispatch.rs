//! Dispatch for single instructions
//!
//! Every operand is popped through the checked stack API, so a missing
//! operand ends the instruction before anything else happens.

use bytecode_system::Instruction;
use core_types::{VmError, VmResult, Word};
use std::cmp::Ordering;
use std::io::Write;

use crate::profile::BranchOutcome;
use crate::vm::Interpreter;

/// What the loop should do with the program counter after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance by one
    Next,
    /// Relative jump by the offset (plus the usual advance)
    Jump(Word),
    /// Stop the run successfully
    Halt,
}

impl<W: Write> Interpreter<W> {
    /// Execute one instruction found at `pc`
    pub(crate) fn dispatch(&mut self, pc: usize, inst: Instruction) -> VmResult<Flow> {
        match inst {
            Instruction::Nop | Instruction::Reserved(_) => {}
            Instruction::Push(digit) => {
                self.stack.push(Word::from(digit))?;
            }
            Instruction::Add => self.binary_op(Word::wrapping_add)?,
            Instruction::Sub => self.binary_op(Word::wrapping_sub)?,
            Instruction::Mul => self.binary_op(Word::wrapping_mul)?,
            Instruction::Div => {
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                if b == 0 {
                    return Err(VmError::DivisionByZero);
                }
                self.stack.push(a.wrapping_div(b))?;
            }
            Instruction::Compare => self.binary_op(compare)?,
            Instruction::PrintNumber => {
                let a = self.stack.pop()?;
                write!(self.output, "{}", a)?;
            }
            Instruction::PrintChar => {
                let a = self.stack.pop()?;
                // rem_euclid keeps negative values inside 0..256
                self.output.write_all(&[a.rem_euclid(256) as u8])?;
            }
            Instruction::Jump => {
                let offset = self.stack.pop()?;
                return Ok(Flow::Jump(offset));
            }
            Instruction::JumpIfZero => {
                let offset = self.stack.pop()?;
                let condition = self.stack.pop()?;
                if condition == 0 {
                    self.profile.record_branch(BranchOutcome::Taken);
                    return Ok(Flow::Jump(offset));
                }
                self.profile.record_branch(BranchOutcome::NotTaken);
            }
            Instruction::Load => {
                let address = self.stack.pop()?;
                let value = self.memory.load(address)?;
                self.stack.push(value)?;
            }
            Instruction::Store => {
                let address = self.stack.pop()?;
                let value = self.stack.pop()?;
                self.memory.store(address, value)?;
            }
            Instruction::Copy => {
                let depth = self.stack.pop()?;
                let value = self.stack.peek_at_depth(depth)?;
                self.stack.push(value)?;
            }
            Instruction::Rotate => {
                let depth = self.stack.pop()?;
                self.stack.rotate_to_top(depth)?;
            }
            Instruction::Drop => {
                self.stack.pop()?;
            }
            Instruction::Halt => return Ok(Flow::Halt),
            Instruction::Unknown(instruction) => {
                return Err(VmError::UnknownInstruction { pc, instruction });
            }
        }
        Ok(Flow::Next)
    }

    /// Pop b, pop a, push `op(a, b)`
    fn binary_op(&mut self, op: impl FnOnce(Word, Word) -> Word) -> VmResult<()> {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(op(a, b))
    }
}

fn compare(a: Word, b: Word) -> Word {
    match a.cmp(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
