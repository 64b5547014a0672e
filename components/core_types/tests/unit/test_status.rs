//! Unit tests for Status

use core_types::Status;

#[test]
fn test_status_codes_match_return_codes() {
    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::ProgramCounterOutOfBounds.code(), 1);
    assert_eq!(Status::UnknownInstruction.code(), 2);
    assert_eq!(Status::EmptyStack.code(), 3);
    assert_eq!(Status::InvalidStackIndex.code(), 4);
    assert_eq!(Status::DivisionByZero.code(), 5);
    assert_eq!(Status::InvalidMemoryAddress.code(), 6);
    assert_eq!(Status::AllocationFailure.code(), 255);
}

#[test]
fn test_status_display() {
    assert_eq!(Status::Ok.to_string(), "ok");
    assert_eq!(Status::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        Status::ProgramCounterOutOfBounds.to_string(),
        "program counter out of bounds"
    );
}
