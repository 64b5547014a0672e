//! Program to Interpreter Integration Tests
//!
//! Programs decoded by bytecode_system and executed by the interpreter.

use bytecode_system::{Instruction, Program};
use core_types::{Status, MEMORY_SIZE};
use integration_tests::run_program;
use interpreter::{Interpreter, RunState, StepOutcome};

/// Test: regression program covering copy, rotate, drop, branch and jump
#[test]
fn test_regression_program() {
    assert_eq!(
        run_program("123451^2v5:4?9p2g8pppppp", &[]),
        (Status::Ok, "945321".to_string())
    );
}

/// Test: the min-search demo over several memory images
#[test]
fn test_min_search_demo() {
    let source = "10>0<<0:1+1-26*?0<1+0>055*-g0<p";

    assert_eq!(run_program(source, &[105, 13, 98]).1, "3");
    assert_eq!(run_program(source, &[0, 4, -2, 8, 1, 0, 6]).1, "5");
    assert_eq!(run_program(source, &[]).1, "1");
}

/// Test: the demo leaves its result in memory cell 0
#[test]
fn test_min_search_demo_memory() {
    let program = Program::parse("10>0<<0:1+1-26*?0<1+0>055*-g0<p");
    let mut interp = Interpreter::new(program, &[105, 13, 98], Vec::new());
    interp.run().unwrap();

    assert_eq!(interp.state(), RunState::Halted(Status::Ok));
    assert_eq!(&interp.memory().as_slice()[..4], &[3, 13, 98, 0]);
}

/// Test: a countdown loop driven step by step
#[test]
fn test_countdown_stepping() {
    let mut interp = Interpreter::new(Program::parse("30^p1-0^6?035*-g"), &[], Vec::new());
    let mut steps = 0;
    while interp.step().unwrap() == StepOutcome::Continue {
        steps += 1;
    }

    assert_eq!(steps, 40);
    assert_eq!(interp.output(), b"321");
    assert_eq!(interp.profile().instructions_executed, 40);
    assert_eq!(interp.profile().max_stack_depth, 4);
}

/// Test: output before a failure is kept
#[test]
fn test_failure_keeps_output() {
    assert_eq!(
        run_program("4p5p00/", &[]),
        (Status::DivisionByZero, "45".to_string())
    );
}

/// Test: each failure status from a small program
#[test]
fn test_failure_statuses() {
    assert_eq!(run_program("05-g", &[]).0, Status::ProgramCounterOutOfBounds);
    assert_eq!(run_program("1x", &[]).0, Status::UnknownInstruction);
    assert_eq!(run_program("p", &[]).0, Status::EmptyStack);
    assert_eq!(run_program("15v", &[]).0, Status::InvalidStackIndex);
    assert_eq!(run_program("10/", &[]).0, Status::DivisionByZero);
    assert_eq!(run_program("05-<", &[]).0, Status::InvalidMemoryAddress);
}

/// Test: the last memory cell is addressable, one past it is not
#[test]
fn test_memory_bounds() {
    let last = format!("7{}>", address_literal(MEMORY_SIZE as i32 - 1));
    assert_eq!(run_program(&last, &[]).0, Status::Ok);

    let past = format!("7{}>", address_literal(MEMORY_SIZE as i32));
    assert_eq!(run_program(&past, &[]).0, Status::InvalidMemoryAddress);
}

/// Build digit code that leaves `n` on the stack (n >= 0).
fn address_literal(n: i32) -> String {
    // Horner form in base 9: d0 9* d1 + 9* d2 + ...
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push(rest % 9);
        rest /= 9;
    }
    digits.reverse();
    let mut code = String::from("0");
    for d in digits {
        code.push_str(&format!("9*{}+", d));
    }
    code
}

/// Test: the reserved instructions do nothing
#[test]
fn test_reserved_instructions_are_noops() {
    assert_eq!(Program::parse("c$").get(0), Some(Instruction::Reserved('c')));
    assert_eq!(run_program("7c$p", &[]), (Status::Ok, "7".to_string()));
}
