//! Contract tests for interpreter API
//!
//! Property checks for the stack, memory and instruction laws every HVM
//! implementation has to satisfy.

use bytecode_system::Program;
use core_types::{Status, VmError, Word, MEMORY_SIZE};
use interpreter::{execute_program, Interpreter, Memory, OperandStack};
use proptest::prelude::*;

// ============================================================================
// Fixed-point contracts
// ============================================================================

/// Memory accesses just outside the valid range always fail
#[test]
fn test_memory_boundary_addresses_contract() {
    let mut memory = Memory::default();
    for address in [-1, MEMORY_SIZE as Word] {
        assert!(matches!(
            memory.load(address),
            Err(VmError::InvalidMemoryAddress(_))
        ));
        assert!(matches!(
            memory.store(address, 0),
            Err(VmError::InvalidMemoryAddress(_))
        ));
    }
}

/// Programs start with PC at the end when empty
#[test]
fn test_empty_program_contract() {
    let mut interp = Interpreter::new(Program::parse(""), &[], Vec::new());
    assert!(interp.run().is_ok());
    assert_eq!(interp.status(), Some(Status::Ok));
    assert_eq!(interp.profile().instructions_executed, 0);
}

proptest! {
    /// A digit instruction pushes exactly its value
    #[test]
    fn prop_digit_pushes_value(digit in 0u8..=9, prefix in prop::collection::vec(0u8..=9, 0..8)) {
        let mut source: String = prefix.iter().map(|d| char::from(b'0' + d)).collect();
        source.push(char::from(b'0' + digit));

        let mut interp = Interpreter::new(Program::parse(&source), &[], Vec::new());
        prop_assert!(interp.run().is_ok());
        prop_assert_eq!(interp.stack().depth(), prefix.len() + 1);
        prop_assert_eq!(interp.stack().peek_at_depth(0).unwrap(), Word::from(digit));
    }

    /// Popping past the bottom fails no matter what came before
    #[test]
    fn prop_empty_pop_after_any_history(values in prop::collection::vec(any::<Word>(), 0..64)) {
        let mut stack = OperandStack::new();
        for &v in &values {
            stack.push(v).unwrap();
        }
        for _ in &values {
            stack.pop().unwrap();
        }
        prop_assert!(matches!(stack.pop(), Err(VmError::EmptyStack)));
    }

    /// Push followed by pop leaves the stack unchanged
    #[test]
    fn prop_push_pop_round_trip(
        values in prop::collection::vec(any::<Word>(), 0..64),
        extra in any::<Word>(),
    ) {
        let mut stack = OperandStack::new();
        for &v in &values {
            stack.push(v).unwrap();
        }
        stack.push(extra).unwrap();
        prop_assert_eq!(stack.pop().unwrap(), extra);
        prop_assert_eq!(stack.as_slice(), values.as_slice());
    }

    /// Rotation reorders but never loses or duplicates a value
    #[test]
    fn prop_rotate_preserves_values(
        values in prop::collection::vec(any::<Word>(), 1..64),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut stack = OperandStack::new();
        for &v in &values {
            stack.push(v).unwrap();
        }
        let depth = pick.index(values.len());
        let picked = stack.peek_at_depth(depth as Word).unwrap();
        stack.rotate_to_top(depth as Word).unwrap();

        prop_assert_eq!(stack.peek_at_depth(0).unwrap(), picked);
        let mut before = values.clone();
        let mut after = stack.as_slice().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Out-of-range depths are rejected without touching the stack
    #[test]
    fn prop_invalid_depth_rejected(
        values in prop::collection::vec(any::<Word>(), 0..16),
        depth in prop_oneof![Word::MIN..0, 16..Word::MAX],
    ) {
        let mut stack = OperandStack::new();
        for &v in &values {
            stack.push(v).unwrap();
        }
        let is_invalid_index = matches!(
            stack.peek_at_depth(depth),
            Err(VmError::InvalidStackIndex { .. })
        );
        prop_assert!(is_invalid_index);
        prop_assert!(stack.rotate_to_top(depth).is_err());
        prop_assert_eq!(stack.as_slice(), values.as_slice());
    }

    /// Dividing by zero fails and pushes nothing
    #[test]
    fn prop_division_by_zero(dividend in any::<Word>()) {
        let mut interp = Interpreter::new(Program::parse("0<0/"), &[dividend], Vec::new());
        prop_assert!(matches!(interp.run(), Err(VmError::DivisionByZero)));
        prop_assert!(interp.stack().is_empty());
    }

    /// Store then load at a valid address yields the stored value
    #[test]
    fn prop_memory_round_trip(address in 0..MEMORY_SIZE as Word, value in any::<Word>()) {
        let mut memory = Memory::default();
        memory.store(address, value).unwrap();
        prop_assert_eq!(memory.load(address).unwrap(), value);
    }

    /// The same round trip driven by `>` and `<`
    #[test]
    fn prop_memory_round_trip_by_program(address in 2..MEMORY_SIZE as Word, value in any::<Word>()) {
        let mut out = Vec::new();
        let status = execute_program("0<1<>1<<p", &[value, address], &mut out);
        prop_assert_eq!(status, Status::Ok);
        prop_assert_eq!(String::from_utf8(out).unwrap(), value.to_string());
    }

    /// Printing a number writes its decimal form
    #[test]
    fn prop_print_number(value in any::<Word>()) {
        let mut out = Vec::new();
        prop_assert_eq!(execute_program("0<p", &[value], &mut out), Status::Ok);
        prop_assert_eq!(String::from_utf8(out).unwrap(), value.to_string());
    }
}
