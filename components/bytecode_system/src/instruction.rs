//! Single-character HVM instructions
//!
//! Defines the decoded form of every instruction character.

use std::fmt;

/// One decoded HVM instruction.
///
/// Binary operations take the top of the stack as their right operand and
/// the entry below it as their left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// ` `: do nothing
    Nop,
    /// `0`-`9`: push the digit's value
    Push(u8),

    // Arithmetic
    /// `+`: push a + b
    Add,
    /// `-`: push a - b
    Sub,
    /// `*`: push a * b
    Mul,
    /// `/`: push a / b, failing on a zero divisor
    Div,
    /// `:`: push the sign of a compared to b (-1, 0 or 1)
    Compare,

    // Output
    /// `p`: print the top as a decimal number
    PrintNumber,
    /// `P`: print the top as a byte (value mod 256)
    PrintChar,

    // Control flow
    /// `g`: relative jump by the popped offset
    Jump,
    /// `?`: pop offset, pop condition; jump when the condition is zero
    JumpIfZero,
    /// `!`: stop the run successfully
    Halt,

    // Memory
    /// `<`: pop an address, push the cell at that address
    Load,
    /// `>`: pop an address, pop a value, store the value at the address
    Store,

    // Stack manipulation
    /// `^`: pop a depth, push a copy of the entry at that depth
    Copy,
    /// `v`: pop a depth, move the entry at that depth to the top
    Rotate,
    /// `d`: pop and discard
    Drop,

    /// `c`, `$`: reserved, executes as a no-op
    Reserved(char),
    /// Any character without a mapping
    Unknown(char),
}

impl Instruction {
    /// Decode one program character. Every character decodes to something.
    pub fn decode(symbol: char) -> Self {
        match symbol {
            ' ' => Instruction::Nop,
            '0'..='9' => Instruction::Push(symbol as u8 - b'0'),
            '+' => Instruction::Add,
            '-' => Instruction::Sub,
            '*' => Instruction::Mul,
            '/' => Instruction::Div,
            ':' => Instruction::Compare,
            'p' => Instruction::PrintNumber,
            'P' => Instruction::PrintChar,
            'g' => Instruction::Jump,
            '?' => Instruction::JumpIfZero,
            '!' => Instruction::Halt,
            '<' => Instruction::Load,
            '>' => Instruction::Store,
            '^' => Instruction::Copy,
            'v' => Instruction::Rotate,
            'd' => Instruction::Drop,
            'c' | '$' => Instruction::Reserved(symbol),
            other => Instruction::Unknown(other),
        }
    }

    /// The program character this instruction was decoded from.
    pub fn symbol(&self) -> char {
        match *self {
            Instruction::Nop => ' ',
            Instruction::Push(digit) => char::from(b'0' + digit),
            Instruction::Add => '+',
            Instruction::Sub => '-',
            Instruction::Mul => '*',
            Instruction::Div => '/',
            Instruction::Compare => ':',
            Instruction::PrintNumber => 'p',
            Instruction::PrintChar => 'P',
            Instruction::Jump => 'g',
            Instruction::JumpIfZero => '?',
            Instruction::Halt => '!',
            Instruction::Load => '<',
            Instruction::Store => '>',
            Instruction::Copy => '^',
            Instruction::Rotate => 'v',
            Instruction::Drop => 'd',
            Instruction::Reserved(symbol) | Instruction::Unknown(symbol) => symbol,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Nop => write!(f, "nop"),
            Instruction::Push(digit) => write!(f, "push {}", digit),
            Instruction::Add => write!(f, "add"),
            Instruction::Sub => write!(f, "sub"),
            Instruction::Mul => write!(f, "mul"),
            Instruction::Div => write!(f, "div"),
            Instruction::Compare => write!(f, "cmp"),
            Instruction::PrintNumber => write!(f, "print"),
            Instruction::PrintChar => write!(f, "printc"),
            Instruction::Jump => write!(f, "jump"),
            Instruction::JumpIfZero => write!(f, "jumpz"),
            Instruction::Halt => write!(f, "halt"),
            Instruction::Load => write!(f, "load"),
            Instruction::Store => write!(f, "store"),
            Instruction::Copy => write!(f, "copy"),
            Instruction::Rotate => write!(f, "rotate"),
            Instruction::Drop => write!(f, "drop"),
            Instruction::Reserved(symbol) => write!(f, "reserved {:?}", symbol),
            Instruction::Unknown(symbol) => write!(f, "unknown {:?}", symbol),
        }
    }
}
