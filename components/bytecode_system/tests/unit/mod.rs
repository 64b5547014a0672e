//! Unit tests for the bytecode system
